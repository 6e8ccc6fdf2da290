//! The closed catalog of HGNC columns.

use serde::{Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string does not name a catalog field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown HGNC field: '{0}'")]
pub struct UnknownFieldError(pub String);

macro_rules! field_catalog {
    ($($variant:ident => $name:literal, $desc:literal;)+) => {
        /// A column of the HGNC complete set, declared in file column order
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $($variant,)+
        }

        impl Field {
            /// Every field, in column order. `Field::ALL[f.index()] == f`.
            pub const ALL: &'static [Field] = &[$(Field::$variant,)+];

            /// Header text of this column
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Field::$variant => $name,)+
                }
            }

            /// HGNC's description of the column
            #[must_use]
            pub const fn description(self) -> &'static str {
                match self {
                    $(Field::$variant => $desc,)+
                }
            }
        }

        impl FromStr for Field {
            type Err = UnknownFieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Field::$variant),)+
                    _ => Err(UnknownFieldError(s.to_string())),
                }
            }
        }
    };
}

field_catalog! {
    HgncId => "hgnc_id",
        "HGNC ID. A unique ID created by the HGNC for every approved symbol.";
    Symbol => "symbol",
        "The HGNC approved gene symbol. Equates to the \"APPROVED SYMBOL\" field within the gene symbol report.";
    Name => "name",
        "HGNC approved name for the gene. Equates to the \"APPROVED NAME\" field within the gene symbol report.";
    LocusGroup => "locus_group",
        "A group name for a set of related locus types as defined by the HGNC (e.g. non-coding RNA).";
    LocusType => "locus_type",
        "The locus type as defined by the HGNC (e.g. RNA, transfer).";
    Status => "status",
        "Status of the symbol report, which can be either \"Approved\" or \"Entry Withdrawn\".";
    Location => "location",
        "Cytogenetic location of the gene (e.g. 2q34).";
    LocationSortable => "location_sortable",
        "Same as \"location\" but single digit chromosomes are prefixed with a 0 enabling them to be sorted in correct numerical order (e.g. 02q34).";
    AliasSymbol => "alias_symbol",
        "Other symbols used to refer to this gene as seen in the \"SYNONYMS\" field in the symbol report.";
    AliasName => "alias_name",
        "Other names used to refer to this gene as seen in the \"SYNONYMS\" field in the gene symbol report.";
    PrevSymbol => "prev_symbol",
        "Symbols previously approved by the HGNC for this gene. Equates to the \"PREVIOUS SYMBOLS & NAMES\" field within the gene symbol report.";
    PrevName => "prev_name",
        "Gene names previously approved by the HGNC for this gene. Equates to the \"PREVIOUS SYMBOLS & NAMES\" field within the gene symbol report.";
    GeneFamily => "gene_family",
        "Name given to a gene family or group the gene has been assigned to. Equates to the \"GENE FAMILY\" field within the gene symbol report.";
    GeneFamilyId => "gene_family_id",
        "ID used to designate a gene family or group the gene has been assigned to.";
    DateApprovedReserved => "date_approved_reserved",
        "The date the entry was first approved.";
    DateSymbolChanged => "date_symbol_changed",
        "The date the gene symbol was last changed.";
    DateNameChanged => "date_name_changed",
        "The date the gene name was last changed.";
    DateModified => "date_modified",
        "Date the entry was last modified.";
    EntrezId => "entrez_id",
        "Entrez gene ID. Found within the \"GENE RESOURCES\" section of the gene symbol report.";
    EnsemblGeneId => "ensembl_gene_id",
        "Ensembl gene ID. Found within the \"GENE RESOURCES\" section of the gene symbol report.";
    VegaId => "vega_id",
        "Vega gene ID. Found within the \"GENE RESOURCES\" section of the gene symbol report.";
    UcscId => "ucsc_id",
        "UCSC gene ID. Found within the \"GENE RESOURCES\" section of the gene symbol report.";
    Ena => "ena",
        "International Nucleotide Sequence Database Collaboration (GenBank, ENA and DDBJ) accession number(s). Found within the \"NUCLEOTIDE SEQUENCES\" section of the gene symbol report.";
    RefseqAccession => "refseq_accession",
        "RefSeq nucleotide accession(s). Found within the \"NUCLEOTIDE SEQUENCES\" section of the gene symbol report.";
    CcdsId => "ccds_id",
        "Consensus CDS ID. Found within the \"NUCLEOTIDE SEQUENCES\" section of the gene symbol report.";
    UniprotIds => "uniprot_ids",
        "UniProt protein accession. Found within the \"PROTEIN RESOURCES\" section of the gene symbol report.";
    PubmedId => "pubmed_id",
        "Pubmed and Europe Pubmed Central PMID(s).";
    MgdId => "mgd_id",
        "Mouse genome informatics database ID. Found within the \"HOMOLOGS\" section of the gene symbol report.";
    RgdId => "rgd_id",
        "Rat genome database gene ID. Found within the \"HOMOLOGS\" section of the gene symbol report.";
    Lsdb => "lsdb",
        "The name of the Locus Specific Mutation Database and URL for the gene separated by a | character";
    Cosmic => "cosmic",
        "Symbol used within the Catalogue of somatic mutations in cancer for the gene.";
    OmimId => "omim_id",
        "Online Mendelian Inheritance in Man (OMIM) ID";
    Mirbase => "mirbase",
        "miRBase ID";
    Homeodb => "homeodb",
        "Homeobox Database ID";
    Snornabase => "snornabase",
        "snoRNABase ID";
    BioparadigmsSlc => "bioparadigms_slc",
        "Symbol used to link to the SLC tables database at bioparadigms.org for the gene";
    Orphanet => "orphanet",
        "Orphanet ID";
    PseudogeneOrg => "pseudogene.org",
        "Pseudogene.org";
    HordeId => "horde_id",
        "Symbol used within HORDE for the gene";
    Merops => "merops",
        "ID used to link to the MEROPS peptidase database";
    Imgt => "imgt",
        "Symbol used within international ImMunoGeneTics information system";
    Iuphar => "iuphar",
        "The objectId used to link to the IUPHAR/BPS Guide to PHARMACOLOGY database. To link to IUPHAR/BPS Guide to PHARMACOLOGY database only use the number (only use 1 from the result objectId:1)";
    KznfGeneCatalog => "kznf_gene_catalog",
        "ID used to link to the Human KZNF Gene Catalog";
    MamitTrnadb => "mamit-trnadb",
        "ID to link to the Mamit-tRNA database";
    Cd => "cd",
        "Symbol used within the Human Cell Differentiation Molecule database for the gene";
    Lncrnadb => "lncrnadb",
        "lncRNA Database ID - Resource now defunct";
    EnzymeId => "enzyme_id",
        "ENZYME EC accession number";
    IntermediateFilamentDb => "intermediate_filament_db",
        "ID used to link to the Human Intermediate Filament Database";
    Agr => "agr",
        "The HGNC ID that the Alliance of Genome Resources (AGR) have linked to their record of the gene. Use the HGNC ID to link to the AGR.";
    ManeSelect => "mane_select",
        "NCBI and Ensembl transcript IDs/acessions including the version number for one high-quality representative transcript per protein-coding gene that is well-supported by experimental data and represents the biology of the gene. The IDs are delimited by |.";
}

impl Field {
    /// Number of fields in the catalog
    pub const COUNT: usize = Self::ALL.len();

    /// Number of indexed fields
    pub const INDEXED_COUNT: usize = 7;

    /// Fields that get a value -> positions index at load time
    pub const INDEXED: [Field; Self::INDEXED_COUNT] = [
        Field::HgncId,
        Field::Symbol,
        Field::EntrezId,
        Field::EnsemblGeneId,
        Field::UcscId,
        Field::RefseqAccession,
        Field::OmimId,
    ];

    /// Dense position of this field, usable as an array index
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Position of this field within [`Field::INDEXED`], if it is indexed
    #[must_use]
    pub const fn indexed_slot(self) -> Option<usize> {
        match self {
            Field::HgncId => Some(0),
            Field::Symbol => Some(1),
            Field::EntrezId => Some(2),
            Field::EnsemblGeneId => Some(3),
            Field::UcscId => Some(4),
            Field::RefseqAccession => Some(5),
            Field::OmimId => Some(6),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_indexed(self) -> bool {
        self.indexed_slot().is_some()
    }

    /// Whether the column holds a `YYYY-MM-DD` date
    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(
            self,
            Field::DateApprovedReserved
                | Field::DateSymbolChanged
                | Field::DateNameChanged
                | Field::DateModified
        )
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
