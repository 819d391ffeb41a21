//! End-to-end tests of the `ngdc-rename` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const GENOME: &str = "\
>GWHGECT00000001.1\tChromosome 1A\tComplete=T\tCircular=F\tOriSeqID=Chr1A\tLen=12
ACGTACGT
ACGT
>GWHGECT00000002.1\tChromosome 1B\tComplete=T\tCircular=F\tOriSeqID=Chr1B\tLen=8
ACGTNNNN
>GWHGECT00000003.1\tMitochondrion\tComplete=T\tCircular=T\tLen=4
ACGT
";

const ANNOTATION: &str = "\
##gff-version 3
##sequence-region GWHGECT00000001.1 1 12
GWHGECT00000001.1\tGWH\tgene\t1\t12\t.\t+\t.\tID=gene1
GWHGECT00000002.1\tGWH\tgene\t2\t8\t.\t-\t.\tID=gene2
GWHGECT00000003.1\tGWH\tgene\t1\t4\t.\t+\t.\tID=gene3
";

fn bin() -> Command {
    Command::cargo_bin("ngdc-rename").unwrap()
}

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("genome.fasta"), GENOME).unwrap();
    fs::write(dir.path().join("genome.gff"), ANNOTATION).unwrap();
    dir
}

#[test]
fn test_ngdc_fasta_and_gff() {
    let dir = setup();
    let d = dir.path();
    bin()
        .arg("ngdc")
        .arg("-f")
        .arg(d.join("genome.fasta"))
        .arg("-o")
        .arg(d.join("out.fa"))
        .arg("-g")
        .arg(d.join("genome.gff"))
        .arg("--output-gff")
        .arg(d.join("out.gff3"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 2 chromosome mappings"))
        .stderr(predicate::str::contains("GWHGECT00000001.1 -> Chr1A"))
        .stderr(predicate::str::contains("Done!"));

    assert_eq!(
        fs::read_to_string(d.join("out.fa")).unwrap(),
        "\
>Chr1A
ACGTACGT
ACGT
>Chr1B
ACGTNNNN
>GWHGECT00000003.1\tMitochondrion\tComplete=T\tCircular=T\tLen=4
ACGT
"
    );
    assert_eq!(
        fs::read_to_string(d.join("out.gff3")).unwrap(),
        "\
##gff-version 3
##sequence-region GWHGECT00000001.1 1 12
Chr1A\tGWH\tgene\t1\t12\t.\t+\t.\tID=gene1
Chr1B\tGWH\tgene\t2\t8\t.\t-\t.\tID=gene2
GWHGECT00000003.1\tGWH\tgene\t1\t4\t.\t+\t.\tID=gene3
"
    );
}

#[test]
fn test_ngdc_fasta_only() {
    let dir = setup();
    let d = dir.path();
    bin()
        .arg("ngdc")
        .arg("-f")
        .arg(d.join("genome.fasta"))
        .arg("-o")
        .arg(d.join("out.fa"))
        .assert()
        .success();
    assert!(fs::read_to_string(d.join("out.fa")).unwrap().starts_with(">Chr1A\n"));
}

#[test]
fn test_output_gff_without_gff_is_usage_error() {
    let dir = setup();
    let d = dir.path();
    bin()
        .arg("ngdc")
        .arg("-f")
        .arg(d.join("genome.fasta"))
        .arg("-o")
        .arg(d.join("out.fa"))
        .arg("--output-gff")
        .arg(d.join("out.gff3"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--gff is required"));
    assert!(!d.join("out.fa").exists());
    assert!(!d.join("out.gff3").exists());
}

#[test]
fn test_gff_without_output_gff_is_usage_error() {
    let dir = setup();
    let d = dir.path();
    bin()
        .arg("ngdc")
        .arg("-f")
        .arg(d.join("genome.fasta"))
        .arg("-o")
        .arg(d.join("out.fa"))
        .arg("-g")
        .arg(d.join("genome.gff"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output-gff is required"));
    assert!(!d.join("out.fa").exists());
}

#[test]
fn test_missing_fasta_fails_with_path() {
    let dir = TempDir::new().unwrap();
    let d = dir.path();
    bin()
        .arg("ngdc")
        .arg("-f")
        .arg(d.join("absent.fasta"))
        .arg("-o")
        .arg(d.join("out.fa"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.fasta"));
}

#[test]
fn test_empty_fasta_gives_empty_mapping() {
    let dir = TempDir::new().unwrap();
    let d = dir.path();
    fs::write(d.join("empty.fasta"), "").unwrap();
    bin()
        .arg("ngdc")
        .arg("-f")
        .arg(d.join("empty.fasta"))
        .arg("-o")
        .arg(d.join("out.fa"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 0 chromosome mappings"));
    assert_eq!(fs::read_to_string(d.join("out.fa")).unwrap(), "");
}

#[test]
fn test_empty_mapping_keeps_headers() {
    let dir = setup();
    let d = dir.path();
    fs::write(d.join("empty.tsv"), "").unwrap();
    bin()
        .arg("custom")
        .arg("-f")
        .arg(d.join("genome.fasta"))
        .arg("-o")
        .arg(d.join("out.fa"))
        .arg("-m")
        .arg(d.join("empty.tsv"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 0 chromosome mappings"));
    assert_eq!(fs::read_to_string(d.join("out.fa")).unwrap(), GENOME);
}

#[test]
fn test_custom_mapping_file() {
    let dir = setup();
    let d = dir.path();
    fs::write(
        d.join("map.tsv"),
        "# old\tnew\nGWHGECT00000003.1\tChrM\nnot a pair\n",
    )
    .unwrap();
    bin()
        .arg("custom")
        .arg("-f")
        .arg(d.join("genome.fasta"))
        .arg("-o")
        .arg(d.join("out.fa"))
        .arg("-m")
        .arg(d.join("map.tsv"))
        .arg("-g")
        .arg(d.join("genome.gff"))
        .arg("--output-gff")
        .arg(d.join("out.gff3"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping invalid line 3"));

    let fa = fs::read_to_string(d.join("out.fa")).unwrap();
    assert!(fa.contains("\n>ChrM\nACGT\n"));
    assert!(fa.starts_with(">GWHGECT00000001.1\tChromosome 1A"));
    let gff = fs::read_to_string(d.join("out.gff3")).unwrap();
    assert!(gff.contains("\nChrM\tGWH\tgene\t1\t4\t"));
}
