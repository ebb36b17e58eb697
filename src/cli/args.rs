use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "chartcrop",
    version,
    about = "Crop the UI border off 1920x1080 chart screenshots"
)]
pub struct CliArgs {
    /// Directory containing the PNG screenshots (not searched recursively)
    #[arg(default_value = ".")]
    pub target: PathBuf,

    /// Enable diagnostic logging on stderr (filter with RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_defaults_to_current_directory() {
        let args = CliArgs::try_parse_from(["chartcrop"]).unwrap();
        assert_eq!(args.target, PathBuf::from("."));
        assert!(!args.log);
    }

    #[test]
    fn accepts_target_and_log_flag() {
        let args = CliArgs::try_parse_from(["chartcrop", "--log", "shots"]).unwrap();
        assert_eq!(args.target, PathBuf::from("shots"));
        assert!(args.log);
    }

    #[test]
    fn rejects_extra_positionals() {
        assert!(CliArgs::try_parse_from(["chartcrop", "a", "b"]).is_err());
    }
}
