// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn list_defaults() {
    let cli = parse(&["jotter", "list"]).unwrap();
    assert_eq!(
        cli.command,
        Command::List {
            search: String::new(),
            category: "all".into(),
            sort: None,
            limit: None,
            output: OutputFormat::Text,
        }
    );
    assert!(cli.seed.is_none());
    assert!(cli.user.is_none());
}

#[test]
fn list_with_everything() {
    let cli = parse(&[
        "jotter", "--seed", "notes.jsonl", "--user", "u1", "list", "--search", "foo",
        "--category", "work", "--sort", "asc", "--limit", "3", "-o", "json",
    ])
    .unwrap();

    assert_eq!(cli.seed, Some(PathBuf::from("notes.jsonl")));
    assert_eq!(cli.user.as_deref(), Some("u1"));
    assert_eq!(
        cli.command,
        Command::List {
            search: "foo".into(),
            category: "work".into(),
            sort: Some(SortArg::Asc),
            limit: Some(3),
            output: OutputFormat::Json,
        }
    );
}

#[test]
fn global_flags_after_subcommand() {
    let cli = parse(&["jotter", "show", "abc", "--user", "u2", "-v"]).unwrap();
    assert_eq!(cli.user.as_deref(), Some("u2"));
    assert!(cli.verbose);
    assert_eq!(
        cli.command,
        Command::Show {
            id: "abc".into(),
            output: OutputFormat::Text,
        }
    );
}

#[parameterized(
    bad_sort = { &["jotter", "list", "--sort", "newest"] },
    bad_limit = { &["jotter", "list", "--limit", "-1"] },
    share_without_id = { &["jotter", "share"] },
    no_command = { &["jotter"] },
)]
fn rejects(args: &[&str]) {
    assert!(parse(args).is_err());
}

#[test]
fn sort_arg_maps_to_order() {
    assert_eq!(jt_core::SortOrder::from(SortArg::Asc), jt_core::SortOrder::Asc);
    assert_eq!(jt_core::SortOrder::from(SortArg::Desc), jt_core::SortOrder::Desc);
}
