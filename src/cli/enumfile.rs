use crate::cli::builtins::BuiltinFile;
use clap::{
    ValueEnum,
    builder::{EnumValueParser, PossibleValue, TypedValueParser, ValueParserFactory},
    error::ErrorKind,
};
use std::{ffi::OsStr, fmt, io::BufRead, marker::PhantomData};

/// A data source named on the command line: one compiled into the binary, or a file.
#[derive(Debug, Clone)]
pub enum BuiltinOrFile<T: ValueEnum> {
    Builtin(T),
    /// A path, where `-` is stdin.
    File(clio::Input),
}

impl<T: ValueEnum + BuiltinFile> BuiltinOrFile<T> {
    pub fn reader(&mut self) -> Box<dyn BufRead + '_> {
        match self {
            Self::Builtin(builtin) => Box::new(builtin.reader()),
            Self::File(file) => file.lock(),
        }
    }
}

impl<T: ValueEnum> fmt::Display for BuiltinOrFile<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(builtin) => match builtin.to_possible_value() {
                Some(value) => write!(f, "builtin '{}'", value.get_name()),
                None => f.write_str("builtin"),
            },
            Self::File(file) => write!(f, "{}", file.path().display()),
        }
    }
}

impl<T: ValueEnum> ValueParserFactory for BuiltinOrFile<T> {
    type Parser = SourceParser<T>;

    fn value_parser() -> Self::Parser {
        SourceParser(PhantomData)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SourceParser<T>(PhantomData<T>);

impl<T: ValueEnum + Send + Sync + 'static> TypedValueParser for SourceParser<T> {
    type Value = BuiltinOrFile<T>;

    /// A builtin name shadows a file of the same name; prefix it with `./` to read the file.
    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        match EnumValueParser::<T>::new().parse_ref(cmd, arg, value) {
            Ok(builtin) => Ok(BuiltinOrFile::Builtin(builtin)),
            Err(_) => match clio::Input::try_from(value) {
                Ok(file) => Ok(BuiltinOrFile::File(file)),
                Err(err) => Err(cmd.clone().error(
                    ErrorKind::ValueValidation,
                    format!("Unable to open {}: {err}", value.to_string_lossy()),
                )),
            },
        }
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        let builtins = T::value_variants().iter().filter_map(ValueEnum::to_possible_value);
        let file = PossibleValue::new("<PATH>").help("Any other value is read as a file");
        Some(Box::new(builtins.chain([file])))
    }
}
