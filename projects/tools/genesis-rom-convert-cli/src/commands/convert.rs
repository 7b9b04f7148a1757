use crate::error::CliError;
use crate::util::Throughput;
use argh::FromArgs;
use bytesize::ByteSize;
use genesis_rom_convert::{
    convert, ensure_extension, load_rom, route, save_rom, ConvertError, FormatTag,
};
use std::{path::Path, path::PathBuf, time::Instant};

#[derive(FromArgs, Debug)]
/// Convert Sega Genesis / Mega Drive ROMs between the .bin (linear) and .md (interleaved) layouts
pub struct ConvertCmd {
    /// input ROM file
    #[argh(positional)]
    pub input: Option<PathBuf>,

    /// output ROM file [default: out.bin]
    #[argh(option, short = 'o', default = "PathBuf::from(\"out.bin\")")]
    pub output: PathBuf,

    /// format of the input (bin, md, smd) [default: inferred from the input file name]
    #[argh(option, short = 'f')]
    pub from: Option<String>,

    /// format of the output (bin, md, smd) [default: inferred from the output file name]
    #[argh(option, short = 't')]
    pub to: Option<String>,

    /// print details about the conversion
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    /// print nothing, not even errors
    #[argh(switch, short = 'q')]
    pub quiet: bool,
}

/// Formats resolved from the command line, before anything is read from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFormats {
    pub from: FormatTag,
    pub to: FormatTag,
}

fn resolve_format(
    explicit: Option<&str>,
    path: &Path,
    default: FormatTag,
    direction: &str,
) -> FormatTag {
    match explicit {
        Some(name) => FormatTag::parse(name),
        None => {
            let format = FormatTag::from_path(path, default);
            log::debug!(
                "No {direction} format given. Using \"{format}\" from \"{}\"",
                path.display()
            );
            format
        }
    }
}

/// Determines the source and target formats.
///
/// Explicit `--from`/`--to` values win. Otherwise the source format comes from the input file
/// extension and the target format from the output file extension.
pub fn resolve_formats(cmd: &ConvertCmd, input: &Path) -> Result<ResolvedFormats, CliError> {
    let from = resolve_format(cmd.from.as_deref(), input, FormatTag::Interleaved, "source");
    if from == FormatTag::Unknown {
        return Err(CliError::InvalidSourceFormat(display_name(
            cmd.from.as_deref(),
            input,
        )));
    }

    let to = resolve_format(cmd.to.as_deref(), &cmd.output, FormatTag::Linear, "target");
    if to == FormatTag::Unknown {
        return Err(CliError::InvalidTargetFormat(display_name(
            cmd.to.as_deref(),
            &cmd.output,
        )));
    }

    Ok(ResolvedFormats { from, to })
}

fn display_name(explicit: Option<&str>, path: &Path) -> String {
    match explicit {
        Some(name) => name.to_owned(),
        None => path.display().to_string(),
    }
}

pub fn handle_convert_command(cmd: ConvertCmd) -> Result<(), CliError> {
    let input = cmd.input.clone().ok_or(CliError::NoInput)?;
    let formats = resolve_formats(&cmd, &input)?;

    // Reject impossible pairs before touching the file system. SMD is refused even when
    // source and target match.
    if !formats.from.is_convertible() || !formats.to.is_convertible() {
        return Err(ConvertError::UnsupportedFormat {
            from: formats.from,
            to: formats.to,
        }
        .into());
    }
    route(formats.from, formats.to)?;

    let rom = load_rom(&input).map_err(|source| CliError::Load {
        path: input.clone(),
        source,
    })?;
    log::info!(
        "Input file: {}, Size: {}, Format: {}",
        input.display(),
        ByteSize(rom.len() as u64),
        formats.from
    );

    let start = Instant::now();
    let converted = convert(&rom, formats.from, formats.to)?;
    let elapsed = start.elapsed();
    log::debug!(
        "Converted in {elapsed:.2?} ({})",
        Throughput::from_elapsed(rom.len() as u64, elapsed)
    );

    let (output, renamed) = ensure_extension(&cmd.output, formats.to);
    if renamed {
        log::warn!(
            "Output file name doesn't match the target format. Writing to \"{}\" instead",
            output.display()
        );
    }

    save_rom(&output, &converted).map_err(CliError::Save)?;
    log::info!(
        "Output file: {}, Size: {}, Format: {}",
        output.display(),
        ByteSize(converted.len() as u64),
        formats.to
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn parse_args(args: &[&str]) -> ConvertCmd {
        ConvertCmd::from_args(&["genconvert"], args).expect("arguments should parse")
    }

    fn cmd(input: &Path, output: &Path, from: Option<&str>, to: Option<&str>) -> ConvertCmd {
        ConvertCmd {
            input: Some(input.to_path_buf()),
            output: output.to_path_buf(),
            from: from.map(str::to_owned),
            to: to.map(str::to_owned),
            verbose: false,
            quiet: true,
        }
    }

    #[test]
    fn parses_short_flags() {
        let parsed = parse_args(&["game.md", "-o", "game.bin", "-f", "md", "-t", "bin", "-v", "-q"]);

        assert_eq!(parsed.input, Some(PathBuf::from("game.md")));
        assert_eq!(parsed.output, PathBuf::from("game.bin"));
        assert_eq!(parsed.from.as_deref(), Some("md"));
        assert_eq!(parsed.to.as_deref(), Some("bin"));
        assert!(parsed.verbose);
        assert!(parsed.quiet);
    }

    #[test]
    fn output_defaults_to_out_bin() {
        let parsed = parse_args(&["game.md"]);
        assert_eq!(parsed.output, PathBuf::from("out.bin"));
        assert_eq!(parsed.from, None);
        assert_eq!(parsed.to, None);
    }

    #[rstest]
    #[case::from_extensions("game.md", "game.bin", None, None, FormatTag::Interleaved, FormatTag::Linear)]
    #[case::reverse("game.bin", "game.md", None, None, FormatTag::Linear, FormatTag::Interleaved)]
    #[case::no_extensions("game", "out", None, None, FormatTag::Interleaved, FormatTag::Linear)]
    #[case::explicit_wins("game.md", "game.bin", Some("BIN"), Some("md"), FormatTag::Linear, FormatTag::Interleaved)]
    #[case::smd_is_resolved("game.smd", "game.bin", None, None, FormatTag::Smd, FormatTag::Linear)]
    fn resolves_formats(
        #[case] input: &str,
        #[case] output: &str,
        #[case] from: Option<&str>,
        #[case] to: Option<&str>,
        #[case] expected_from: FormatTag,
        #[case] expected_to: FormatTag,
    ) {
        let input = PathBuf::from(input);
        let cmd = cmd(&input, Path::new(output), from, to);

        let formats = resolve_formats(&cmd, &input).unwrap();

        assert_eq!(formats.from, expected_from);
        assert_eq!(formats.to, expected_to);
    }

    #[rstest]
    #[case::explicit_source("game.md", "game.bin", Some("gen"), None, 2)]
    #[case::inferred_source("game.gen", "game.bin", None, None, 2)]
    #[case::explicit_target("game.md", "game.bin", None, Some("rom"), 3)]
    #[case::inferred_target("game.md", "game.rom", None, None, 3)]
    fn rejects_unknown_formats(
        #[case] input: &str,
        #[case] output: &str,
        #[case] from: Option<&str>,
        #[case] to: Option<&str>,
        #[case] exit_code: u8,
    ) {
        let input = PathBuf::from(input);
        let cmd = cmd(&input, Path::new(output), from, to);

        let err = resolve_formats(&cmd, &input).unwrap_err();

        assert_eq!(err.exit_code(), exit_code);
    }

    #[test]
    fn missing_input_argument_is_reported() {
        let mut cmd = cmd(Path::new("unused"), Path::new("out.bin"), None, None);
        cmd.input = None;

        let err = handle_convert_command(cmd).unwrap_err();

        assert!(matches!(err, CliError::NoInput));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn converts_md_to_bin_on_disk() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("game.md");
        let output = dir.path().join("game.bin");
        fs::write(&input, [0x11, 0x22, 0x33, 0x44]).unwrap();

        handle_convert_command(cmd(&input, &output, None, None)).unwrap();

        assert_eq!(fs::read(&output).unwrap(), [0x22, 0x44, 0x11, 0x33]);
    }

    #[test]
    fn converting_back_restores_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("game.md");
        let bin = dir.path().join("game.bin");
        let restored = dir.path().join("restored.md");
        let data: Vec<u8> = (0..=255u8).collect();
        fs::write(&input, &data).unwrap();

        handle_convert_command(cmd(&input, &bin, None, None)).unwrap();
        handle_convert_command(cmd(&bin, &restored, None, None)).unwrap();

        assert_eq!(fs::read(&restored).unwrap(), data);
    }

    #[test]
    fn identity_conversion_copies_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("game.bin");
        let output = dir.path().join("copy.bin");
        fs::write(&input, [1, 2, 3]).unwrap();

        handle_convert_command(cmd(&input, &output, None, None)).unwrap();

        assert_eq!(fs::read(&output).unwrap(), [1, 2, 3]);
    }

    #[test]
    fn mismatched_output_extension_is_appended() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("game.md");
        let output = dir.path().join("game.md.out");
        fs::write(&input, [0x11, 0x22]).unwrap();

        handle_convert_command(cmd(&input, &output, None, Some("bin"))).unwrap();

        let written = dir.path().join("game.md.out.bin");
        assert_eq!(fs::read(&written).unwrap(), [0x22, 0x11]);
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_file_exits_with_4() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("missing.md");
        let output = dir.path().join("out.bin");

        let err = handle_convert_command(cmd(&input, &output, None, None)).unwrap_err();

        assert_eq!(err.exit_code(), 4);
        assert!(!output.exists());
    }

    #[test]
    fn odd_length_input_exits_with_8() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("game.md");
        let output = dir.path().join("game.bin");
        fs::write(&input, [1, 2, 3]).unwrap();

        let err = handle_convert_command(cmd(&input, &output, None, None)).unwrap_err();

        assert_eq!(err.exit_code(), 8);
        assert!(!output.exists());
    }

    #[test]
    fn smd_is_rejected_before_loading() {
        let dir = TempDir::new().unwrap();
        // Never created; the format check must fail first.
        let input = dir.path().join("game.smd");
        let output = dir.path().join("game.bin");

        let err = handle_convert_command(cmd(&input, &output, None, None)).unwrap_err();

        assert_eq!(err.exit_code(), 9);
    }

    #[rstest]
    #[case::smd_to_smd("game.smd", "out.smd", None, None)]
    #[case::explicit_smd_to_smd("game.bin", "out.bin", Some("smd"), Some("smd"))]
    #[case::bin_to_smd("game.bin", "out.smd", None, None)]
    fn smd_is_always_rejected(
        #[case] input: &str,
        #[case] output: &str,
        #[case] from: Option<&str>,
        #[case] to: Option<&str>,
    ) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join(input);
        let output = dir.path().join(output);
        fs::write(&input, [1, 2, 3, 4]).unwrap();

        let err = handle_convert_command(cmd(&input, &output, from, to)).unwrap_err();

        assert!(matches!(
            err,
            CliError::Convert(ConvertError::UnsupportedFormat { .. })
        ));
        assert_eq!(err.exit_code(), 9);
        assert!(!output.exists());
    }

    #[test]
    fn dotfile_output_name_selects_format() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("game.bin");
        let output = dir.path().join(".md");
        fs::write(&input, [0x22, 0x44, 0x11, 0x33]).unwrap();

        handle_convert_command(cmd(&input, &output, None, None)).unwrap();

        assert_eq!(fs::read(&output).unwrap(), [0x11, 0x22, 0x33, 0x44]);
        assert!(!dir.path().join(".md.bin").exists());
    }

    #[test]
    fn unwritable_output_exits_with_6() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("game.md");
        let output = dir.path().join("no_such_dir").join("game.bin");
        fs::write(&input, [1, 2]).unwrap();

        let err = handle_convert_command(cmd(&input, &output, None, None)).unwrap_err();

        assert_eq!(err.exit_code(), 6);
    }
}
