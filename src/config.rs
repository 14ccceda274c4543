use anyhow::{anyhow, Result};
use clap::error::ErrorKind;
use clap::Parser;

/// Poll a token price and raise an Opsgenie alert when it crosses a threshold.
#[derive(Parser, Debug, Clone)]
#[command(name = "price-checker", version, about)]
pub struct Config {
    /// Token contract address to watch
    #[arg(long = "token_address")]
    pub token_address: String,

    /// Chain the token lives on (e.g. ethereum, solana)
    #[arg(long = "chain_name")]
    pub chain_name: String,

    /// Birdeye API key
    #[arg(long = "api_key")]
    pub api_key: String,

    /// Etherscan API key for the gas price check
    #[arg(long = "etherscan_api_key")]
    pub etherscan_api_key: String,

    /// Price level that triggers an alert when met or exceeded
    #[arg(long = "threshold")]
    pub threshold: f64,

    /// Seconds to sleep between polls
    #[arg(long = "poll_interval", default_value_t = 10)]
    pub poll_interval: u64,

    /// Opsgenie API key; alerts stay console-only when absent
    #[arg(long = "opsgenie_api_key")]
    pub opsgenie_api_key: Option<String>,
}

impl Config {
    /// Parse the command line. Missing required flags exit the process with
    /// status 1 and a stderr diagnostic naming them; other parse failures
    /// keep clap's defaults (help and version exit 0).
    pub fn from_args() -> Self {
        match Self::try_parse() {
            Ok(config) => config,
            Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
                eprintln!("{err}");
                std::process::exit(1);
            }
            Err(err) => err.exit(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("token_address", &self.token_address),
            ("chain_name", &self.chain_name),
            ("api_key", &self.api_key),
            ("etherscan_api_key", &self.etherscan_api_key),
        ];
        for (flag, value) in required {
            if value.trim().is_empty() {
                return Err(anyhow!("--{flag} cannot be empty"));
            }
        }
        if self.poll_interval == 0 {
            return Err(anyhow!("--poll_interval must be at least 1 second"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use clap::error::ErrorKind;
    use clap::Parser;

    fn full_args() -> Vec<&'static str> {
        vec![
            "price-checker",
            "--token_address",
            "0xABC",
            "--chain_name",
            "ethereum",
            "--api_key",
            "birdeye-key",
            "--etherscan_api_key",
            "etherscan-key",
            "--threshold",
            "1.5",
        ]
    }

    #[test]
    fn parses_all_required_flags() {
        let config = Config::try_parse_from(full_args()).expect("should parse");
        assert_eq!(config.token_address, "0xABC");
        assert_eq!(config.chain_name, "ethereum");
        assert_eq!(config.api_key, "birdeye-key");
        assert_eq!(config.etherscan_api_key, "etherscan-key");
        assert_eq!(config.threshold, 1.5);
    }

    #[test]
    fn poll_interval_defaults_to_ten_seconds() {
        let config = Config::try_parse_from(full_args()).unwrap();
        assert_eq!(config.poll_interval, 10);
    }

    #[test]
    fn opsgenie_key_is_optional() {
        let config = Config::try_parse_from(full_args()).unwrap();
        assert!(config.opsgenie_api_key.is_none());

        let mut args = full_args();
        args.extend(["--opsgenie_api_key", "genie-key"]);
        let config = Config::try_parse_from(args).unwrap();
        assert_eq!(config.opsgenie_api_key.as_deref(), Some("genie-key"));
    }

    #[test]
    fn missing_threshold_is_reported_by_name() {
        let mut args = full_args();
        args.truncate(args.len() - 2); // drop --threshold and its value
        let err = Config::try_parse_from(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("--threshold"));
    }

    #[test]
    fn missing_everything_lists_all_required_flags() {
        let err = Config::try_parse_from(["price-checker"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        let message = err.to_string();
        for flag in [
            "--token_address",
            "--chain_name",
            "--api_key",
            "--etherscan_api_key",
            "--threshold",
        ] {
            assert!(message.contains(flag), "missing {flag} in: {message}");
        }
    }

    #[test]
    fn rejects_non_numeric_threshold() {
        let mut args = full_args();
        let last = args.len() - 1;
        args[last] = "not-a-number";
        assert!(Config::try_parse_from(args).is_err());
    }

    #[test]
    fn validate_rejects_empty_token_address() {
        let mut config = Config::try_parse_from(full_args()).unwrap();
        config.token_address = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("token_address"));
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let mut config = Config::try_parse_from(full_args()).unwrap();
        config.poll_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_complete_config() {
        let config = Config::try_parse_from(full_args()).unwrap();
        assert!(config.validate().is_ok());
    }
}
