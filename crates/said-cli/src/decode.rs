//! # Decode Subcommand
//!
//! Prints every field encoded in a single identity number.

use std::io::Write;

use anyhow::Context;
use clap::Args;
use said_core::{Citizenship, Gender, IdSummary, SouthAfricanId};
use serde::Serialize;

use crate::output::{json_line, OutputFormat};

/// Arguments for the decode subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Identity number to decode. ASCII whitespace is ignored.
    pub id: String,

    /// Century of birth (e.g. 19 for the 1900s), to print a full birth date.
    #[arg(long)]
    pub century: Option<u16>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct Decoded {
    #[serde(flatten)]
    summary: IdSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_date: Option<String>,
}

/// Decode `args.id` and write the fields to `out`.
pub fn run<W: Write>(args: &DecodeArgs, out: &mut W) -> anyhow::Result<()> {
    let id = SouthAfricanId::new(args.id.as_str())?;

    let birth_date = match args.century {
        Some(century) => {
            let date = id.birth_date_in_century(century).with_context(|| {
                format!(
                    "{} is not a calendar date in century {century}",
                    id.date_segment()
                )
            })?;
            Some(date.format("%Y-%m-%d").to_string())
        }
        None => None,
    };

    let decoded = Decoded {
        summary: id.summary(),
        birth_date,
    };

    match args.format {
        OutputFormat::Json => writeln!(out, "{}", json_line(&decoded)?)?,
        OutputFormat::Text => write_text(&decoded, out)?,
    }
    Ok(())
}

fn write_text<W: Write>(decoded: &Decoded, out: &mut W) -> std::io::Result<()> {
    let s = &decoded.summary;
    writeln!(out, "id:          {}", s.id)?;
    match &decoded.birth_date {
        Some(date) => writeln!(out, "birth date:  {date}")?,
        None => writeln!(
            out,
            "birth date:  {}-{}-{} (yy-mm-dd)",
            s.birth_year, s.birth_month, s.birth_day
        )?,
    }
    let gender = match s.gender {
        Gender::Female => "female",
        Gender::Male => "male",
    };
    let citizenship = match s.citizenship {
        Citizenship::Citizen => "citizen",
        Citizenship::PermanentResident => "permanent resident",
    };
    writeln!(out, "gender:      {gender}")?;
    writeln!(out, "citizenship: {citizenship}")?;
    writeln!(out, "race:        {}", s.race)?;
    writeln!(out, "checksum:    {}", s.checksum)
}
