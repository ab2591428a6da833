use std::sync::Arc;

use crate::config::{
    DEFAULT_BLOCK_SIZE, FileExistsPolicy, SinkConfig, SinkKind, SinkSpec, SourceConfig,
    SourceKind, TransferConfig, TransferMode,
};
use crate::io::{MemorySink, WriteMode};

#[test]
fn empty_config_is_stdin_to_stdout_copy() {
    let cfg: TransferConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(cfg.input.kind, SourceKind::Stdin);
    assert_eq!(cfg.output.kind, SinkKind::Stdout);
    assert_eq!(cfg.mode, TransferMode::Copy);
    assert_eq!(cfg.effective_block_size(), DEFAULT_BLOCK_SIZE);
}

#[test]
fn parse_full_yaml_config() {
    let yaml = r#"
input:
  kind: file
  path: in.bin
output:
  kind: file
  path: out.bin
  file_exists_policy: append
mode: full_blocks
block_size: 512
"#;

    let cfg: TransferConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.input.kind, SourceKind::File);
    assert_eq!(cfg.input.path.as_deref(), Some("in.bin"));
    assert_eq!(cfg.output.path.as_deref(), Some("out.bin"));
    assert_eq!(cfg.output.file_exists_policy, Some(FileExistsPolicy::Append));
    assert_eq!(cfg.mode, TransferMode::FullBlocks);
    assert_eq!(cfg.effective_block_size(), 512);
}

#[test]
fn unknown_mode_is_rejected() {
    let res: Result<TransferConfig, _> = serde_json::from_str(r#"{"mode": "sideways"}"#);
    assert!(res.is_err());
}

#[test]
fn builder_style_config_matches_parsed() {
    let cfg = TransferConfig::new()
        .with_input(SourceConfig::file("a.txt"))
        .with_output(SinkConfig::stderr())
        .with_mode(TransferMode::Lines)
        .with_block_size(8);

    assert_eq!(cfg.input.path.as_deref(), Some("a.txt"));
    assert_eq!(cfg.output.kind, SinkKind::Stderr);
    assert_eq!(cfg.mode, TransferMode::Lines);
    assert_eq!(cfg.block_size, Some(8));
}

#[test]
fn file_exists_policy_write_modes() {
    assert_eq!(FileExistsPolicy::Append.write_mode(), WriteMode::Append);
    assert_eq!(FileExistsPolicy::Overwrite.write_mode(), WriteMode::Truncate);
    assert_eq!(FileExistsPolicy::Error.write_mode(), WriteMode::CreateNew);
}

#[test]
fn sink_spec_defaults_to_overwrite() {
    let spec = SinkSpec::new("raw", Arc::new(MemorySink::new("id")));
    assert_eq!(spec.raw, "raw");
    assert_eq!(spec.file_exists_policy, FileExistsPolicy::Overwrite);

    let spec = spec.with_file_exists_policy(FileExistsPolicy::Error);
    assert_eq!(spec.file_exists_policy, FileExistsPolicy::Error);
}
