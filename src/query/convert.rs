//! Identifier conversions built on [`HgncDatabase::lookup`].
//!
//! Functions taking a free-form `gene` accept any of the supported naming
//! systems (symbol, alias, previous symbol, HGNC ID, Entrez ID, Ensembl gene
//! ID, UCSC ID) and classify it with [`classify_gene`]. Each returns the value
//! from the first matching record, which may be empty if that record has no
//! value for the requested field.

use crate::catalog::store::HgncDatabase;
use crate::core::field::Field;
use crate::core::record::LIST_SEPARATOR;
use crate::query::classify::classify_gene;

impl HgncDatabase {
    /// MANE Select transcript pair, `ENST…|NM_…`
    pub fn mane_select(&self, gene: &str) -> Option<&str> {
        self.lookup_first(gene, classify_gene(gene), Field::ManeSelect)
    }

    /// Ensembl half of the MANE Select pair
    pub fn mane_select_enst(&self, gene: &str) -> Option<&str> {
        self.mane_select(gene)?.split(LIST_SEPARATOR).next()
    }

    /// RefSeq half of the MANE Select pair
    pub fn mane_select_refseq(&self, gene: &str) -> Option<&str> {
        self.mane_select(gene)?.split(LIST_SEPARATOR).nth(1)
    }

    /// Whether the gene's locus group is `protein-coding gene`
    pub fn is_coding_gene(&self, gene: &str) -> bool {
        self.lookup_first(gene, classify_gene(gene), Field::LocusGroup)
            .is_some_and(|group| group.starts_with("protein-coding"))
    }

    pub fn entrez_id_to_symbol(&self, entrez_id: &str) -> Option<&str> {
        self.lookup_first(entrez_id, Field::EntrezId, Field::Symbol)
    }

    pub fn symbol_to_entrez_id(&self, symbol: &str) -> Option<&str> {
        self.lookup_first(symbol, Field::Symbol, Field::EntrezId)
    }

    /// Ensembl gene ID to symbol. A version suffix (`ENSG….12`) is ignored.
    pub fn ensg_to_symbol(&self, ensg: &str) -> Option<&str> {
        let unversioned = ensg.split('.').next().unwrap_or(ensg);
        self.lookup_first(unversioned, Field::EnsemblGeneId, Field::Symbol)
    }

    pub fn symbol_to_ensg(&self, symbol: &str) -> Option<&str> {
        self.lookup_first(symbol, Field::Symbol, Field::EnsemblGeneId)
    }

    pub fn ucsc_id_to_symbol(&self, ucsc_id: &str) -> Option<&str> {
        self.lookup_first(ucsc_id, Field::UcscId, Field::Symbol)
    }

    pub fn symbol_to_ucsc_id(&self, symbol: &str) -> Option<&str> {
        self.lookup_first(symbol, Field::Symbol, Field::UcscId)
    }

    /// RefSeq accession(s) of a gene
    pub fn gene_refseq_accessions(&self, gene: &str) -> Option<&str> {
        self.lookup_first(gene, classify_gene(gene), Field::RefseqAccession)
    }
}
