use crate::core::field::Field;

/// Guess which naming system a gene identifier belongs to.
///
/// Rules are checked in order and the first match wins:
///
/// | Input | Field |
/// |-------|-------|
/// | `HGNC:` prefix | `hgnc_id` |
/// | `ENSG` prefix | `ensembl_gene_id` |
/// | `uc` prefix | `ucsc_id` |
/// | parses as an integer | `entrez_id` |
/// | anything else | `symbol` |
///
/// ```
/// use hgnc_db::core::field::Field;
/// use hgnc_db::query::classify::classify_gene;
///
/// assert_eq!(classify_gene("HGNC:1100"), Field::HgncId);
/// assert_eq!(classify_gene("BRCA1"), Field::Symbol);
/// ```
#[must_use]
pub fn classify_gene(gene: &str) -> Field {
    if gene.starts_with("HGNC:") {
        Field::HgncId
    } else if gene.starts_with("ENSG") {
        Field::EnsemblGeneId
    } else if gene.starts_with("uc") {
        Field::UcscId
    } else if gene.parse::<i64>().is_ok() {
        Field::EntrezId
    } else {
        Field::Symbol
    }
}
