/// Resolve a path relative to the crate manifest directory
#[macro_export]
macro_rules! relative_file {
    ($f : expr) => {{
        let base = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        base.join($f)
    }};
}

/// Read the entire contents of a file relative to the crate manifest directory
#[macro_export]
macro_rules! bytes_from_relative_file {
    ($f : expr) => {{
        std::fs::read($crate::relative_file!($f)).unwrap()
    }};
}
