use std::{fs, path::PathBuf, str::FromStr};

use clap::Parser;
use serde::Deserialize;

use crate::{
    cli::OutputFormat,
    core::{
        hour::Hour,
        profile::{ConsumptionProfile, ProfilePreset},
    },
    prelude::*,
    tables::build_profile_table,
};

/// Largest hourly weight the profile editor accepts.
const MAX_WEIGHT: f64 = 25.0;

/// Single-hour profile edit, `HOUR=WEIGHT`.
#[derive(Copy, Clone, Debug)]
pub struct ProfileEdit {
    pub hour: Hour,
    pub weight: f64,
}

impl FromStr for ProfileEdit {
    type Err = Error;

    fn from_str(edit: &str) -> Result<Self> {
        let (hour, weight) =
            edit.split_once('=').with_context(|| format!("expected `HOUR=WEIGHT`, got `{edit}`"))?;
        let hour: u8 = hour.trim().parse().with_context(|| format!("invalid hour `{hour}`"))?;
        let weight: f64 =
            weight.trim().parse().with_context(|| format!("invalid weight `{weight}`"))?;
        ensure!(weight.is_finite(), "invalid weight `{weight}`");
        Ok(Self { hour: Hour::try_from(hour)?, weight })
    }
}

#[derive(Parser)]
pub struct ProfileSourceArgs {
    /// Canonical profile to start from.
    #[clap(long = "profile-preset", default_value = "residential", env = "PROFILE_PRESET")]
    pub preset: ProfilePreset,

    /// TOML file with `weights = [24 numbers]`, overrides the preset.
    #[clap(long = "profile-file", env = "PROFILE_FILE")]
    pub file: Option<PathBuf>,

    /// Hour weight edits applied in order, for example `--set 12=8.5`.
    #[clap(long = "set", value_name = "HOUR=WEIGHT")]
    pub edits: Vec<ProfileEdit>,
}

#[derive(Deserialize)]
struct ProfileFile {
    weights: ConsumptionProfile,
}

impl ProfileSourceArgs {
    pub fn load(&self) -> Result<ConsumptionProfile> {
        let profile = match &self.file {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?;
                toml::from_str::<ProfileFile>(&contents)
                    .with_context(|| format!("failed to parse `{}`", path.display()))?
                    .weights
            }
            None => self.preset.profile(),
        };
        let profile = self.edits.iter().fold(profile, |profile, edit| {
            let weight = edit.weight.clamp(0.0, MAX_WEIGHT);
            if (weight - edit.weight).abs() > f64::EPSILON {
                warn!(hour = %edit.hour, requested = edit.weight, weight, "clamped the weight");
            }
            profile.adjusted(edit.hour, weight)
        });
        debug!(
            preset = %self.preset,
            total = profile.total(),
            n_edits = self.edits.len(),
            "loaded consumption profile",
        );
        Ok(profile)
    }
}

#[derive(Parser)]
pub struct ProfileArgs {
    #[clap(flatten)]
    pub profile: ProfileSourceArgs,

    #[clap(long = "format", default_value = "table", env = "OUTPUT_FORMAT")]
    pub format: OutputFormat,
}

pub fn show_profile(args: &ProfileArgs) -> Result {
    let profile = args.profile.load()?;
    match args.format {
        OutputFormat::Table => {
            println!("{}", build_profile_table(&profile));
            println!("Total weight: {:.2}%", profile.total());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_parse_edit() {
        let edit: ProfileEdit = "12=8.5".parse().unwrap();
        assert_eq!(edit.hour, Hour::try_from(12).unwrap());
        assert_abs_diff_eq!(edit.weight, 8.5);
    }

    #[test]
    fn test_parse_edit_errors() {
        assert!("12".parse::<ProfileEdit>().is_err());
        assert!("24=1".parse::<ProfileEdit>().is_err());
        assert!("x=1".parse::<ProfileEdit>().is_err());
        assert!("3=nan".parse::<ProfileEdit>().is_err());
    }

    #[test]
    fn test_load_applies_edits_in_order() {
        let args = ProfileSourceArgs {
            preset: ProfilePreset::Industrial,
            file: None,
            edits: vec!["12=10".parse().unwrap(), "3=-5".parse().unwrap()],
        };
        let profile = args.load().unwrap();
        assert_abs_diff_eq!(profile.weight(Hour::try_from(3).unwrap()), 0.0);
        assert_abs_diff_eq!(profile.total(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_parse_profile_file() {
        let weights = vec!["4.0"; 23].join(", ");
        let file: ProfileFile = toml::from_str(&format!("weights = [{weights}, 8.0]")).unwrap();
        assert_abs_diff_eq!(file.weights.total(), 100.0);
    }
}
