use crate::model::AccountCredentials;
use crate::sync::SyncOptions;
use clap::Parser;
use secrecy::SecretString;

/// Send the latest Octopus Energy gas meter total to tado° Energy IQ.
#[derive(Parser)]
#[command(version)]
pub struct Args {
    /// tado° account email
    #[arg(long)]
    pub tado_email: String,

    /// tado° account password
    #[arg(long)]
    pub tado_password: String,

    /// MPRN (Meter Point Reference Number) for the gas meter
    #[arg(long)]
    pub mprn: String,

    /// Gas meter serial number
    #[arg(long)]
    pub gas_serial_number: String,

    /// Octopus Energy API key
    #[arg(long)]
    pub octopus_api_key: String,

    /// Aggregate and log the reading without submitting it
    #[arg(long)]
    pub dry_run: bool,

    /// Refuse to submit when the consumption history is incomplete or empty
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    pub fn tado_credentials(&self) -> AccountCredentials {
        AccountCredentials::new(self.tado_email.as_str(), self.tado_password.as_str())
    }

    pub fn octopus_api_key(&self) -> SecretString {
        SecretString::from(self.octopus_api_key.clone())
    }

    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            dry_run: self.dry_run,
            strict: self.strict,
        }
    }
}
