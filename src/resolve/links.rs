//! External database links.

/// gnomAD landing page
pub const GNOMAD_URL: &str = "https://gnomad.broadinstitute.org/";
/// dbSNP landing page
pub const DBSNP_URL: &str = "https://www.ncbi.nlm.nih.gov/snp/";
/// OncoKB landing page
pub const ONCOKB_URL: &str = "https://oncokb.org";

/// gnomAD variant page for VCF-style coordinates.
pub fn gnomad_variant_url(
    chromosome: &str,
    position: u64,
    reference_allele: &str,
    alternate_allele: &str,
) -> String {
    format!(
        "https://gnomad.broadinstitute.org/variant/{}-{}-{}-{}",
        chromosome, position, reference_allele, alternate_allele
    )
}

/// dbSNP page for a reference SNP.
pub fn dbsnp_variant_url(rsid: &str) -> String {
    format!("{}{}", DBSNP_URL, rsid)
}

/// OncoKB page for a gene alteration.
pub fn oncokb_alteration_url(hugo_symbol: &str, alteration: &str) -> String {
    format!("{}/gene/{}/{}", ONCOKB_URL, hugo_symbol, alteration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        assert_eq!(
            gnomad_variant_url("17", 41242962, "A", "AGA"),
            "https://gnomad.broadinstitute.org/variant/17-41242962-A-AGA"
        );
        assert_eq!(
            dbsnp_variant_url("rs80357906"),
            "https://www.ncbi.nlm.nih.gov/snp/rs80357906"
        );
        assert_eq!(
            oncokb_alteration_url("BRAF", "V600E"),
            "https://oncokb.org/gene/BRAF/V600E"
        );
    }
}
