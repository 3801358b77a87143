use crate::{Arguments, EncoderKind};
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

const DEFAULT_CHUNK_SIZE: &str = "4096";

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_message_file_argument(command);
        let command = Self::register_frequency_file_argument(command);
        let command = Self::register_encoder_argument(command);
        let command = Self::register_threads_argument(command);
        Self::register_chunk_size_argument(command)
    }

    fn register_message_file_argument(command: Command) -> Command {
        command.arg(Self::create_message_file_argument())
    }

    fn register_frequency_file_argument(command: Command) -> Command {
        command.arg(Self::create_frequency_file_argument())
    }

    fn register_encoder_argument(command: Command) -> Command {
        command.arg(Self::create_encoder_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_chunk_size_argument(command: Command) -> Command {
        command.arg(Self::create_chunk_size_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_message_file_argument() -> Arg {
        Arg::new("message_file")
            .help("Path to the text file holding the message")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_frequency_file_argument() -> Arg {
        arg!(frequency_file: -f --frequency_file <FILE> "JSON file with symbol counts; counted from the message if absent")
            .required(false)
            .value_parser(value_parser!(PathBuf))
    }

    fn create_encoder_argument() -> Arg {
        arg!(encoder: -e --encoder <ENCODER> "Encoder used for the message")
            .default_value("Table")
            .required(false)
            .value_parser(value_parser!(EncoderKind))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads for the parallel encoder")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_chunk_size_argument() -> Arg {
        arg!(chunk_size: -c --chunk_size <SYMBOLS> "Symbols per job of the parallel encoder")
            .default_value(DEFAULT_CHUNK_SIZE)
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            message_file: Self::extract_message_file_argument(matches),
            frequency_file: Self::extract_frequency_file_argument(matches),
            encoder: Self::extract_encoder_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            chunk_size: Self::extract_chunk_size_argument(matches),
        }
    }

    fn extract_message_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("message_file")
            .expect("Required argument message_file not provided")
            .clone()
    }

    fn extract_frequency_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("frequency_file").cloned()
    }

    fn extract_encoder_argument(matches: &ArgMatches) -> EncoderKind {
        matches
            .get_one::<EncoderKind>("encoder")
            .expect("Encoder must be provided, but was unset.")
            .to_owned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_chunk_size_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("chunk_size")
            .expect("Chunk size must be provided, but was unset.")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, EncoderKind};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_message_file_argument() {
        let message_file_name = "message.txt";
        let command = Command::new("test");
        let command = CLIParser::register_message_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, message_file_name]);
        let message_file = CLIParser::extract_message_file_argument(&matches);
        assert_eq!(message_file.file_name().unwrap(), message_file_name);
    }

    #[test]
    fn parse_frequency_file_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_frequency_file_argument(command);
        let matches = command.get_matches_from(vec![
            PROGRAM_NAME_ARGUMENT,
            "--frequency_file",
            "frequencies.json",
        ]);
        let frequency_file = CLIParser::extract_frequency_file_argument(&matches);
        assert_eq!(
            frequency_file.unwrap().file_name().unwrap(),
            "frequencies.json"
        );
    }

    #[test]
    fn parse_missing_frequency_file_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_frequency_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        assert!(CLIParser::extract_frequency_file_argument(&matches).is_none());
    }

    #[test]
    fn parse_encoder_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_encoder_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-e", "Traversal"]);
        let actual = CLIParser::extract_encoder_argument(&matches);
        assert_eq!(actual, EncoderKind::Traversal);
    }

    #[test]
    fn parse_encoder_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_encoder_argument(command);
        let result =
            command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--encoder", "Arithmetic"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Illegal value for encoder not detected");
        }
    }

    #[test]
    fn parse_number_of_threads_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_threads_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--threads", "5"]);
        let actual = CLIParser::extract_threads_argument(&matches);
        assert_eq!(actual, 5);
    }

    #[test]
    fn parse_chunk_size_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_chunk_size_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-c", "128"]);
        let actual = CLIParser::extract_chunk_size_argument(&matches);
        assert_eq!(actual, 128);
    }

    #[test]
    fn parse_required_arguments_only() {
        let message_file_name = "message.txt";
        let message_file_path = format!("/input_directory/{}", message_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, &message_file_path, "-t", "8"]);
        assert_eq!(
            arguments.message_file.file_name().unwrap(),
            message_file_name,
            "message file does not match"
        );
        assert!(
            arguments.frequency_file.is_none(),
            "frequency file should be unset"
        );
        assert_eq!(
            arguments.encoder,
            EncoderKind::Table,
            "encoder does not match"
        );
        assert_eq!(arguments.number_of_threads, 8, "number_of_threads does not match");
        assert_eq!(arguments.chunk_size, 4096, "chunk_size does not match");
    }
}
