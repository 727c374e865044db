use clap::Parser;
use colored::Colorize;
use sheetlua::cli;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sheetlua")]
#[command(about = "Convert Excel workbooks to Lua nested tables")]
#[command(long_about = "Sheetlua - Excel workbook → Lua nested table converter

Reads every sheet of an .xlsx workbook and writes a Lua source file
declaring workbook[sheet_name][row][column] = value for every cell slot,
dense across each sheet's bounding box (blank cells become explicit nil).

METADATA:
  Everything from the '-- METADATA_START' line to end-of-file is carried
  over verbatim on regeneration, so hand-edited or runtime-written
  preferences survive a re-convert. First runs get a default block with an
  empty ColumnFilter table.

EXAMPLES:
  sheetlua data.xlsx               # writes data.lua alongside the source
  sheetlua data.xlsx out/data.lua  # explicit destination

The generated file exposes both tables to its caller:
  local workbook, metadata = dofile(\"data.lua\")")]
#[command(version)]
struct Cli {
    /// Path to the source Excel file (.xlsx)
    input: PathBuf,

    /// Output Lua file path (default: source path with a .lua extension)
    output: Option<PathBuf>,

    /// Show verbose conversion steps
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::convert(cli.input, cli.output, cli.verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "ERROR:".bold().red());
            ExitCode::FAILURE
        }
    }
}
