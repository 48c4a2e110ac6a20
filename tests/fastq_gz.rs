use illumina_fastq_reader::{FastqReader, IdFormat, Source, count_reads};
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

const RECORDS: &[(&str, &str, &str, &str)] = &[
    ("@HWUSI-EAS100R:6:73:941:1973#0/1", "ACGTN", "+", "!!!!!"),
    ("@EAS139:136:FC706VJ:2:2104:15343:197393 1:Y:18:ATCACG", "ACGT", "+EAS139", "####"),
    ("@SEQID", "A", "+", "#"),
];

fn write_records<W: Write>(w: &mut W) {
    for (id, seq, opt, qual) in RECORDS {
        writeln!(w, "{id}\n{seq}\n{opt}\n{qual}").unwrap();
    }
}

fn check_records(fq: FastqReader<'_>) {
    let formats = [IdFormat::Illumina, IdFormat::Illumina18, IdFormat::Unrecognized];
    let mut n = 0;
    for (rec, ((id, seq, opt, qual), format)) in fq.zip(RECORDS.iter().zip(formats)) {
        let rec = rec.unwrap();
        assert_eq!(rec.seqid.format(), format);
        assert_eq!(rec.seqid.to_string(), *id);
        assert_eq!(rec.sequence, *seq);
        assert_eq!(rec.optid, *opt);
        assert_eq!(rec.quality, *qual);
        n += 1;
    }
    assert_eq!(n, RECORDS.len());
}

#[test]
fn parse_plain_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.fastq");
    {
        let mut f = File::create(&path).unwrap();
        write_records(&mut f);
    }

    let fq = FastqReader::from_path(&path).expect("open plain");
    assert!(fq.is_owned());
    assert!(matches!(fq.source(), Source::Path(p) if p == &path));
    check_records(fq);
    assert_eq!(count_reads(&path).unwrap(), 3);
}

#[cfg(feature = "gzip")]
#[test]
fn parse_gz_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.fastq.gz");
    {
        let f = File::create(&path).unwrap();
        let mut enc = flate2::write::GzEncoder::new(f, flate2::Compression::fast());
        write_records(&mut enc);
        enc.finish().unwrap();
    }

    check_records(FastqReader::from_path(&path).expect("open gz"));
    assert_eq!(count_reads(&path).unwrap(), 3);
}

#[test]
fn gzip_content_without_gz_extension_is_not_decompressed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.fastq");
    {
        let f = File::create(&path).unwrap();
        let mut enc = flate2::write::GzEncoder::new(f, flate2::Compression::fast());
        write_records(&mut enc);
        enc.finish().unwrap();
    }

    let mut fq = FastqReader::from_path(&path).unwrap();
    let first = fq.next().unwrap();
    assert!(first.is_err() || first.unwrap().seqid.format() == IdFormat::Unrecognized);
}

#[test]
fn truncated_file_reports_malformations() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("truncated.fastq");
    {
        let mut f = File::create(&path).unwrap();
        write_records(&mut f);
        writeln!(f, "@r4\nACGT").unwrap();
    }

    let err = count_reads(&path).unwrap_err();
    assert!(err.is_malformed_file());
    assert!(err.to_string().contains("not a FASTQ file"));

    let mut fq = FastqReader::from_path(&path).unwrap();
    for _ in 0..RECORDS.len() {
        fq.next().unwrap().unwrap();
    }
    assert!(fq.next().unwrap().unwrap_err().is_malformed_record());
    assert!(fq.next().is_none());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.fastq");
    assert!(FastqReader::from_path(&path).is_err());
    assert!(count_reads(&path).is_err());
}

#[test]
fn close_releases_owned_file_early() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.fastq");
    {
        let mut f = File::create(&path).unwrap();
        write_records(&mut f);
    }

    let mut fq = FastqReader::from_path(&path).unwrap();
    assert!(fq.is_owned());
    assert_eq!(fq.next().unwrap().unwrap().sequence, RECORDS[0].1);
    fq.close();
    assert!(fq.next().is_none());
    assert_eq!(fq.records_read(), 1);

    // a second close has nothing left to release
    fq.close();
    assert!(fq.next().is_none());
    assert_eq!(fq.records_read(), 1);
}
