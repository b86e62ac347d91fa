use assert_matches::assert_matches;
use clap::Parser;

use super::*;

fn validate(args: &[&str]) -> Result<Request> {
    let args: Vec<_> = std::iter::once("wsub").chain(args.iter().copied()).collect();
    check_args(&args)?;
    Opt::try_parse_from(args).map_err(usage_error)?.validate()
}

#[test]
fn test_minimal() {
    let request = validate(&["-s", "cat", "-r", "dog", "in.txt", "out.txt"]).unwrap();
    assert_eq!(
        request,
        Request {
            search: "cat".into(),
            replacement: "dog".into(),
            range: LineRange::all(),
            wildcard: false,
            input: "in.txt".into(),
            output: "out.txt".into(),
        }
    );
}

#[test]
fn test_full() {
    let request = validate(&["-w", "-l", "2,3", "-s", "cat*", "-r", "dog", "in.txt", "out.txt"]).unwrap();
    assert!(request.wildcard);
    assert_eq!(request.range, LineRange::new(2, 3).unwrap());
    assert_eq!(request.search, "cat*");
}

#[test]
fn test_options_after_files() {
    let request = validate(&["in.txt", "out.txt", "-s", "a", "-r", "b", "-w", "-w"]).unwrap();
    assert_eq!(request.input, PathBuf::from("in.txt"));
    assert!(request.wildcard);
}

#[test]
fn test_stdio() {
    let request = validate(&["-s", "a", "-r", "b", "-", "-"]).unwrap();
    assert_eq!(request.input, PathBuf::from("-"));
    assert_eq!(request.output, PathBuf::from("-"));
}

#[test]
fn test_empty_replacement() {
    let request = validate(&["-s", "a", "-r", "", "in", "out"]).unwrap();
    assert_eq!(request.replacement, "");
}

#[test]
fn test_not_enough_arguments() {
    let err = validate(&["-s", "a", "-r", "b", "in"]).unwrap_err();
    assert_matches!(err, Error::NotEnoughArguments { expected: 6, actual: 5 });
    assert_eq!(err.kind(), ExitKind::MissingArgument);
}

#[test]
fn test_not_enough_arguments_before_options() {
    let err = validate(&["-r", "b", "-s"]).unwrap_err();
    assert_matches!(err, Error::NotEnoughArguments { expected: 6, actual: 3 });
    assert_eq!(err.kind(), ExitKind::MissingArgument);

    let err = validate(&["-l"]).unwrap_err();
    assert_eq!(err.kind(), ExitKind::MissingArgument);

    let err = validate(&[]).unwrap_err();
    assert_matches!(err, Error::NotEnoughArguments { actual: 0, .. });
}

#[test]
fn test_informational_arguments() {
    let cases: [&[&str]; 6] = [
        &["wsub", "--help"],
        &["wsub", "-h"],
        &["wsub", "--version"],
        &["wsub", "-V"],
        &["wsub", "--shell-completions", "bash"],
        &["wsub", "--shell-completions=zsh"],
    ];
    for args in cases {
        assert_matches!(check_args(args), Ok(()), "args {args:?}");
    }
}

#[test]
fn test_missing_files() {
    let err = validate(&["-s", "a", "-r", "b", "-l", "1,2", "in"]).unwrap_err();
    assert_matches!(err, Error::MissingFiles);
    assert_eq!(err.kind(), ExitKind::MissingArgument);
}

#[test]
fn test_duplicate() {
    let err = validate(&["-s", "a", "-s", "b", "-r", "c", "in", "out"]).unwrap_err();
    assert_matches!(err, Error::DuplicateArgument { option: 's' });
    assert_eq!(err.kind(), ExitKind::DuplicateArgument);

    let err = validate(&["-s", "a", "-r", "b", "-l", "1,2", "-l", "1,3", "in", "out"]).unwrap_err();
    assert_matches!(err, Error::DuplicateArgument { option: 'l' });
}

#[test]
fn test_search_missing() {
    let err = validate(&["-r", "b", "-l", "1,2", "in", "out"]).unwrap_err();
    assert_matches!(err, Error::MissingSearch);
    assert_eq!(err.kind(), ExitKind::SArgumentMissing);

    let err = validate(&["-s", "-r", "b", "in", "out", "x"]).unwrap_err();
    assert_matches!(err, Error::InvalidSearch { .. });
    assert_eq!(err.kind(), ExitKind::SArgumentMissing);

    let err = validate(&["-s", "", "-r", "b", "in", "out"]).unwrap_err();
    assert_matches!(err, Error::InvalidSearch { .. });
}

#[test]
fn test_replacement_missing() {
    let err = validate(&["-s", "a", "-l", "1,2", "in", "out"]).unwrap_err();
    assert_matches!(err, Error::MissingReplacement);
    assert_eq!(err.kind(), ExitKind::RArgumentMissing);

    let err = validate(&["-s", "a", "-r", "-x", "in", "out"]).unwrap_err();
    assert_matches!(err, Error::InvalidReplacement { .. });
    assert_eq!(err.kind(), ExitKind::RArgumentMissing);
}

#[test]
fn test_line_range_invalid() {
    for range in ["3,2", "0,2", "-1,2", "2", "a,b", "1,2,3"] {
        let err = validate(&["-s", "a", "-r", "b", "-l", range, "in", "out"]).unwrap_err();
        assert_eq!(err.kind(), ExitKind::LArgumentInvalid, "range {range:?}");
    }
}

#[test]
fn test_value_missing_at_end() {
    let err = validate(&["-r", "b", "in", "out", "x", "-s"]).unwrap_err();
    assert_matches!(err, Error::Usage { .. });
    assert_eq!(err.kind(), ExitKind::SArgumentMissing);

    let err = validate(&["-s", "a", "in", "out", "x", "-l"]).unwrap_err();
    assert_eq!(err.kind(), ExitKind::LArgumentInvalid);
}

#[test]
fn test_unknown_option() {
    let err = validate(&["-s", "a", "-r", "b", "-x", "in", "out"]).unwrap_err();
    assert_matches!(err, Error::Usage { .. });
    assert_eq!(err.kind(), ExitKind::MissingArgument);
}

#[test]
fn test_buffer_size() {
    let opt = Opt::try_parse_from(["wsub", "--buffer-size", "1 KiB"]).unwrap();
    assert_eq!(opt.buffer_size.map(|x| x.get()), Some(1024));

    let opt = Opt::try_parse_from(["wsub", "--buffer-size", "4K"]).unwrap();
    assert_eq!(opt.buffer_size.map(|x| x.get()), Some(4096));

    let opt = Opt::try_parse_from(["wsub"]).unwrap();
    assert_eq!(opt.buffer_size, None);

    assert!(Opt::try_parse_from(["wsub", "--buffer-size", "0"]).is_err());
    assert!(Opt::try_parse_from(["wsub", "--buffer-size", "lots"]).is_err());
}

#[test]
fn test_config() {
    let opt = Opt::try_parse_from(["wsub", "--config", "a.yaml", "-s", "a", "--config", "b.toml"]).unwrap();
    assert_eq!(opt.config, vec!["a.yaml", "b.toml"]);
}

#[test]
fn test_command() {
    use clap::CommandFactory;
    Opt::command().debug_assert();
}
