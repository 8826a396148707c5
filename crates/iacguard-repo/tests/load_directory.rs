//! Integration tests for loading a Terraform directory into the analysis model.

use camino::{Utf8Path, Utf8PathBuf};
use iacguard_domain::model::BlockKind;
use iacguard_repo::{LoadError, load_directory};
use tempfile::TempDir;

fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
}

fn write_file(path: &Utf8Path, contents: &str) {
    std::fs::write(path, contents).expect("write file");
}

#[test]
fn realistic_module_loads_every_block() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    write_file(
        &root.join("network.tf"),
        r#"
resource "aws_security_group" "bastion" {
  name        = "bastion"
  description = "SSH"

  ingress {
    from_port   = 22
    to_port     = 22
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }

  egress {
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }
}

resource "aws_eip" "nat" {
  domain = "vpc"
}
"#,
    );
    write_file(
        &root.join("storage.tf"),
        r#"
data "aws_caller_identity" "current" {}

resource "aws_s3_bucket" "logs" {
  bucket = "logs-${data.aws_caller_identity.current.account_id}"
  acl    = "public-read"
}

resource "aws_ebs_volume" "scratch" {
  availability_zone = "us-east-1a"
  size              = 2048
}
"#,
    );
    write_file(&root.join("terraform.tfvars"), "region = \"us-east-1\"\n");

    let model = load_directory(&root).expect("load");
    let kinds: Vec<_> = model
        .resources
        .iter()
        .map(|r| (r.block, r.kind.as_str()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (BlockKind::Resource, "aws_security_group"),
            (BlockKind::Resource, "aws_eip"),
            (BlockKind::Data, "aws_caller_identity"),
            (BlockKind::Resource, "aws_s3_bucket"),
            (BlockKind::Resource, "aws_ebs_volume"),
        ]
    );

    let sg = model.resources[0].attributes();
    assert_eq!(sg.blocks("ingress").count(), 1);
    assert_eq!(sg.blocks("egress").count(), 1);

    let bucket = model.resources[3].attributes();
    assert_eq!(bucket.string("acl"), Ok(Some("public-read")));
    assert!(bucket.string("bucket").is_err(), "interpolation needs context");

    let volume = &model.resources[4];
    assert_eq!(volume.attributes().number("size"), Ok(Some(2048.0)));
    assert_eq!(volume.location.path, root.join("storage.tf").as_str());
    assert_eq!(volume.location.line, 9);
}

#[test]
fn loading_twice_is_identical() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    for (name, body) in [
        ("b.tf", "resource \"aws_eip\" \"b\" {}\n"),
        ("a.tf", "resource \"aws_eip\" \"a\" {}\n"),
        ("c.tf", "resource \"aws_eip\" \"c\" {}\n"),
    ] {
        write_file(&root.join(name), body);
    }

    let first = load_directory(&root).expect("first");
    let second = load_directory(&root).expect("second");
    let names = |m: &iacguard_domain::model::AnalysisModel| {
        m.resources
            .iter()
            .map(|r| (r.name.clone(), r.location.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&first), names(&second));
    assert_eq!(
        names(&first).into_iter().map(|(n, _)| n).collect::<Vec<_>>(),
        vec!["a", "b", "c"]
    );
}

#[test]
fn one_bad_file_discards_valid_siblings() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_file(&root.join("good.tf"), "resource \"aws_eip\" \"ok\" {}\n");
    write_file(&root.join("bad.tf"), "resource \"aws_eip\" \"oops\" {\n  acl = \n}\n");

    match load_directory(&root) {
        Err(LoadError::Parse { path, .. }) => assert!(path.ends_with("bad.tf")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn unreadable_file_is_file_read_error() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    std::fs::write(root.join("binary.tf"), [0xff, 0xfe, 0x00, 0x80]).expect("write");

    let err = load_directory(&root).unwrap_err();
    assert!(matches!(err, LoadError::FileRead { .. }), "{err:?}");
}
