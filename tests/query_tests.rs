//! Behavioural tests for loading and querying an HGNC dataset.
//!
//! Most tests run against `tests/data/hgnc_sample.tsv`, a nine-row subset of
//! the HGNC complete set that includes a quoted/padded row, a short row, a
//! withdrawn entry and an unknown extra column.

use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::PathBuf;

use hgnc_db::{classify_gene, Field, HgncDatabase, QueryOptions, Record};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/hgnc_sample.tsv")
}

fn sample() -> HgncDatabase {
    HgncDatabase::load_tsv(&sample_path(), false).unwrap()
}

fn from_tsv(text: &str) -> HgncDatabase {
    HgncDatabase::from_reader(Cursor::new(text.to_string())).unwrap()
}

/// Positions of `records` within the store, found by identity
fn positions(db: &HgncDatabase, records: &[&Record]) -> Vec<usize> {
    records
        .iter()
        .map(|r| {
            db.records()
                .iter()
                .position(|candidate| std::ptr::eq(candidate, *r))
                .unwrap()
        })
        .collect()
}

/// Reference answer: compare every record's field
fn brute_force(db: &HgncDatabase, value: &str, field: Field) -> Vec<usize> {
    if value.is_empty() {
        return Vec::new();
    }
    db.records()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.get(field) == value)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn test_sample_loads() {
    let db = sample();
    assert_eq!(db.len(), 9);

    let stats = db.stats();
    assert_eq!(stats.canonical_symbols, 9);
    assert_eq!(stats.aliases, 15);
    assert_eq!(stats.reassigned_aliases, 0);
    assert_eq!(stats.indexed_keys[&Field::EntrezId], 8);
    assert_eq!(stats.indexed_keys[&Field::OmimId], 6);
}

#[test]
fn test_quoted_and_padded_cells_are_cleaned() {
    let db = sample();
    let a2m = db.record(1).unwrap();
    assert_eq!(a2m.symbol(), "A2M");
    assert_eq!(a2m.name(), "alpha-2-macroglobulin");
    assert_eq!(a2m.entrez_id(), "2");
    assert_eq!(db.lookup("2", Field::EntrezId, Field::Symbol), vec!["A2M"]);
    assert_eq!(db.lookup("CPAMD5", Field::Symbol, Field::HgncId), vec!["HGNC:7"]);
}

#[test]
fn test_short_rows_are_padded_with_empty_values() {
    let db = sample();
    let linc = db.fetch("LINC00115", Field::Symbol);
    assert_eq!(linc.len(), 1);
    assert_eq!(linc[0].refseq_accession(), "NR_024321");
    assert_eq!(linc[0].omim_id(), "");
    assert_eq!(db.lookup("LINC00115", Field::Symbol, Field::ManeSelect), vec![""]);

    let withdrawn = db.fetch("HGNC:1", Field::HgncId);
    assert_eq!(withdrawn[0].status(), "Entry Withdrawn");
    assert_eq!(withdrawn[0].entrez_id(), "");
}

#[test]
fn test_fields_outside_the_header_are_empty() {
    let db = sample();
    for record in db.records() {
        assert_eq!(record.get(Field::UniprotIds), "");
        assert_eq!(record.get(Field::Agr), "");
    }
    assert!(db.fetch("first", Field::Name).is_empty());
}

#[test]
fn test_every_indexed_value_finds_its_record() {
    let db = sample();
    for field in Field::INDEXED {
        for (position, record) in db.records().iter().enumerate() {
            let value = record.get(field);
            if value.is_empty() {
                continue;
            }
            let found = positions(&db, &db.fetch(value, field));
            assert_eq!(found, vec![position], "{field} = {value}");
        }
    }
}

#[test]
fn test_index_and_scan_agree_for_every_field() {
    let db = sample();
    for &field in Field::ALL {
        let mut values: BTreeSet<String> = db
            .records()
            .iter()
            .map(|r| r.get(field).to_string())
            .collect();
        values.extend(["", "HGNC:404", "NOT_PRESENT", "a1bg", "1q22"].map(String::from));

        for value in &values {
            let found = positions(&db, &db.fetch(value, field));
            assert_eq!(found, brute_force(&db, value, field), "{field} = {value:?}");
        }
    }
}

#[test]
fn test_lookup_is_fetch_then_project() {
    let db = sample();
    let queries = [
        ("BRCA1", Field::Symbol),
        ("GBA", Field::Symbol),
        ("HER1", Field::Symbol),
        ("1q22", Field::Location),
        ("protein-coding gene", Field::LocusGroup),
        ("Approved", Field::Status),
        ("ENSG00000141510", Field::EnsemblGeneId),
        ("nothing", Field::Symbol),
    ];

    for (value, query) in queries {
        for &target in Field::ALL {
            let projected: Vec<&str> = db
                .fetch(value, query)
                .iter()
                .map(|r| r.get(target))
                .collect();
            assert_eq!(db.lookup(value, query, target), projected);
        }
    }
}

#[test]
fn test_empty_value_short_circuits() {
    let db = sample();
    for &field in Field::ALL {
        assert!(db.fetch("", field).is_empty());
        assert!(db.lookup("", field, Field::Symbol).is_empty());
    }
}

#[test]
fn test_normalization_properties() {
    let db = sample();
    let symbols = db.symbols();

    // Canonical symbols are returned as-is
    for record in db.records() {
        assert_eq!(symbols.normalize(record.symbol(), true), record.symbol());
    }

    // Every alias and previous symbol resolves to its owner
    for record in db.records() {
        for alias in record.alias_symbols().chain(record.prev_symbols()) {
            assert_eq!(symbols.normalize(alias, true), record.symbol());
        }
    }

    // Unknown strings come back trimmed
    assert_eq!(symbols.normalize("  NOT_A_GENE\t", true), "NOT_A_GENE");
    assert_eq!(symbols.normalize("  GBA ", false), "GBA");
}

#[test]
fn test_symbol_toggle_scenario() {
    let db = sample();

    // No record carries the literal symbol GBA
    db.set_auto_normalize(false);
    assert!(db.fetch("GBA", Field::Symbol).is_empty());

    db.set_auto_normalize(true);
    let records = db.fetch("GBA", Field::Symbol);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].symbol(), "GBA1");

    // Per-query options ignore the shared flag
    let literal = QueryOptions {
        normalize_symbols: false,
    };
    assert!(db.fetch_with("GBA", Field::Symbol, literal).is_empty());
}

#[test]
fn test_alias_resolution_scenario() {
    let without_alias = from_tsv("hgnc_id\tsymbol\tprev_symbol\tentrez_id\nHGNC:1100\tBRCA1\t\t672\n");
    assert!(without_alias.fetch("brca1p1_alias", Field::Symbol).is_empty());
    assert!(without_alias.fetch("BRCA1P1", Field::Symbol).is_empty());

    let with_alias =
        from_tsv("hgnc_id\tsymbol\tprev_symbol\tentrez_id\nHGNC:1100\tBRCA1\tBRCA1P1\t672\n");
    assert_eq!(with_alias.lookup("BRCA1P1", Field::Symbol, Field::EntrezId), vec!["672"]);

    with_alias.set_auto_normalize(false);
    assert!(with_alias.lookup("BRCA1P1", Field::Symbol, Field::EntrezId).is_empty());
}

#[test]
fn test_shared_alias_last_record_wins() {
    let db = from_tsv(
        "symbol\talias_symbol\tprev_symbol\tentrez_id\n\
         FIRST\tSHARED\t\t1\n\
         SECOND\t\tSHARED\t2\n\
         THIRD\tOTHER\t\t3\n",
    );
    assert_eq!(db.symbols().resolve_alias("SHARED"), Some("SECOND"));
    assert_eq!(db.lookup("SHARED", Field::Symbol, Field::EntrezId), vec!["2"]);
    assert_eq!(db.stats().reassigned_aliases, 1);

    let reversed = from_tsv(
        "symbol\talias_symbol\tprev_symbol\tentrez_id\n\
         SECOND\t\tSHARED\t2\n\
         FIRST\tSHARED\t\t1\n",
    );
    assert_eq!(reversed.lookup("SHARED", Field::Symbol, Field::EntrezId), vec!["1"]);
}

#[test]
fn test_duplicate_indexed_values_keep_row_order() {
    let db = from_tsv(
        "hgnc_id\tsymbol\trefseq_accession\n\
         HGNC:1\tAAA\tNM_1\n\
         HGNC:2\tBBB\tNM_2\n\
         HGNC:3\tCCC\tNM_1\n",
    );
    assert_eq!(
        db.lookup("NM_1", Field::RefseqAccession, Field::HgncId),
        vec!["HGNC:1", "HGNC:3"]
    );
}

#[test]
fn test_classified_queries() {
    let db = sample();
    for (gene, symbol) in [
        ("HGNC:1100", "BRCA1"),
        ("ENSG00000012048", "BRCA1"),
        ("uc002ict.4", "BRCA1"),
        ("672", "BRCA1"),
        ("BRCC1", "BRCA1"),
    ] {
        assert_eq!(db.lookup(gene, classify_gene(gene), Field::Symbol), vec![symbol]);
    }
}

#[test]
fn test_dates() {
    let db = sample();
    let brca1 = db.fetch("BRCA1", Field::Symbol)[0];
    assert_eq!(
        brca1.date(Field::DateModified),
        chrono::NaiveDate::from_ymd_opt(2023, 9, 20)
    );
    assert_eq!(brca1.date(Field::DateApprovedReserved), None);
}

#[test]
fn test_concurrent_readers() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HgncDatabase>();

    let db = sample();
    std::thread::scope(|scope| {
        for worker in 0..8 {
            let db = &db;
            scope.spawn(move || {
                for i in 0..500 {
                    let gene = ["BRCA1", "p53", "HGNC:3236", "1956", "GCB"][(worker + i) % 5];
                    let found = db.lookup(gene, classify_gene(gene), Field::HgncId);
                    assert_eq!(found.len(), 1, "{gene}");
                    assert_eq!(db.fetch("1q22", Field::Location).len(), 2);
                }
            });
        }
    });
}
