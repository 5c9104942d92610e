#[macro_export]
macro_rules! key_path {
    ($path:expr) => {
        <$crate::KeyPath as ::std::str::FromStr>::from_str($path).expect("valid key path")
    };
}
