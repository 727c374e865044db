use crate::error::ConvertResult;
use crate::excel::WorkbookReader;
use crate::lua::{metadata, GridSerializer};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Execute the convert command
pub fn convert(input: PathBuf, output: Option<PathBuf>, verbose: bool) -> ConvertResult<()> {
    let output = output.unwrap_or_else(|| default_output_path(&input));

    println!("{}", "📊 Excel → Lua conversion".bold().green());
    println!("   Source: {}", input.display());
    println!("   Output: {}\n", output.display());

    // Old metadata must be captured before the destination is overwritten;
    // in-place regeneration reads and writes the same path.
    let preserved = metadata::extract(&output);

    if verbose {
        if preserved.is_some() {
            println!("{}", "📖 Preserving existing metadata section".cyan());
        } else {
            println!("{}", "📖 No prior metadata found, using defaults".cyan());
        }
    }

    let workbook = WorkbookReader::new(&input).read()?;

    if verbose {
        println!("   Found {} sheets", workbook.sheets.len());
        for sheet in &workbook.sheets {
            println!(
                "   📄 {}: {} rows × {} columns",
                sheet.name.bright_blue(),
                sheet.max_row(),
                sheet.max_col()
            );
        }
        println!();
    }

    let mut lines = GridSerializer::new(&input).serialize(&workbook);
    lines.push(metadata::resolve(preserved));

    fs::write(&output, lines.join("\n"))?;

    println!(
        "{} Converted to {}",
        "SUCCESS:".bold().green(),
        output.display()
    );
    Ok(())
}

/// Destination path when none is given: source with its extension swapped
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("lua")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_replaces_extension() {
        assert_eq!(
            default_output_path(Path::new("data/report.xlsx")),
            PathBuf::from("data/report.lua")
        );
    }

    #[test]
    fn test_default_output_path_without_extension() {
        assert_eq!(
            default_output_path(Path::new("report")),
            PathBuf::from("report.lua")
        );
    }
}
