// Compiles a regex from a string literal known to be valid
macro_rules! regex(
    ($s:expr) => (::regex::Regex::new($s).unwrap());
);
