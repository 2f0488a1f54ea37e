//! A `hashmap!` macro in the style of `vec!`: keys and values joined with
//! `=>`, trailing comma allowed.

#[macro_export]
macro_rules! hashmap {
    () => {
        ::std::collections::HashMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut hm = ::std::collections::HashMap::new();
        $(hm.insert($key, $value);)+
        hm
    }};
}
