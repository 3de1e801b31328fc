/// Data compiled into the binary, selectable by name on the command line.
pub trait BuiltinFile {
    fn reader(&self) -> std::io::Cursor<&'static [u8]>;
}

/// Implements [`BuiltinFile`] for a `ValueEnum`, embedding one deflated file per variant.
macro_rules! impl_builtin_file {
    ($builtin:ident, $($variant:ident => $filepath:literal),* $(,)?) => {
        impl crate::cli::builtins::BuiltinFile for $builtin {
            fn reader(&self) -> std::io::Cursor<&'static [u8]> {
                match self {
                    $(
                        Self::$variant => {
                            include_flate::flate!(static DATA: [u8] from $filepath);
                            std::io::Cursor::new(DATA.as_slice())
                        }
                    )*
                }
            }
        }
    };
}
pub(crate) use impl_builtin_file;
