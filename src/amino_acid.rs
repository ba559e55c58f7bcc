/// One-letter symbol for codons that do not translate
pub const UNKNOWN: char = 'X';

/// One-letter symbol for stop codons
pub const STOP: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    Alanine,
    Arginine,
    Asparagine,
    AsparticAcid,
    Cysteine,
    GlutamicAcid,
    Glutamine,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
    Stop,
}

impl AminoAcid {
    pub fn one_letter(&self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Arginine => 'R',
            Self::Asparagine => 'N',
            Self::AsparticAcid => 'D',
            Self::Cysteine => 'C',
            Self::GlutamicAcid => 'E',
            Self::Glutamine => 'Q',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Leucine => 'L',
            Self::Lysine => 'K',
            Self::Methionine => 'M',
            Self::Phenylalanine => 'F',
            Self::Proline => 'P',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
            Self::Valine => 'V',
            Self::Stop => STOP,
        }
    }
}

// Indexed by the codon read as a base-4 number with A=0, C=1, G=2, T=3
const GENETIC_CODE: [AminoAcid; 64] = [
    AminoAcid::Lysine,        //AAA
    AminoAcid::Asparagine,    //AAC
    AminoAcid::Lysine,        //AAG
    AminoAcid::Asparagine,    //AAT
    AminoAcid::Threonine,     //ACA
    AminoAcid::Threonine,     //ACC
    AminoAcid::Threonine,     //ACG
    AminoAcid::Threonine,     //ACT
    AminoAcid::Arginine,      //AGA
    AminoAcid::Serine,        //AGC
    AminoAcid::Arginine,      //AGG
    AminoAcid::Serine,        //AGT
    AminoAcid::Isoleucine,    //ATA
    AminoAcid::Isoleucine,    //ATC
    AminoAcid::Methionine,    //ATG
    AminoAcid::Isoleucine,    //ATT
    AminoAcid::Glutamine,     //CAA
    AminoAcid::Histidine,     //CAC
    AminoAcid::Glutamine,     //CAG
    AminoAcid::Histidine,     //CAT
    AminoAcid::Proline,       //CCA
    AminoAcid::Proline,       //CCC
    AminoAcid::Proline,       //CCG
    AminoAcid::Proline,       //CCT
    AminoAcid::Arginine,      //CGA
    AminoAcid::Arginine,      //CGC
    AminoAcid::Arginine,      //CGG
    AminoAcid::Arginine,      //CGT
    AminoAcid::Leucine,       //CTA
    AminoAcid::Leucine,       //CTC
    AminoAcid::Leucine,       //CTG
    AminoAcid::Leucine,       //CTT
    AminoAcid::GlutamicAcid,  //GAA
    AminoAcid::AsparticAcid,  //GAC
    AminoAcid::GlutamicAcid,  //GAG
    AminoAcid::AsparticAcid,  //GAT
    AminoAcid::Alanine,       //GCA
    AminoAcid::Alanine,       //GCC
    AminoAcid::Alanine,       //GCG
    AminoAcid::Alanine,       //GCT
    AminoAcid::Glycine,       //GGA
    AminoAcid::Glycine,       //GGC
    AminoAcid::Glycine,       //GGG
    AminoAcid::Glycine,       //GGT
    AminoAcid::Valine,        //GTA
    AminoAcid::Valine,        //GTC
    AminoAcid::Valine,        //GTG
    AminoAcid::Valine,        //GTT
    AminoAcid::Stop,          //TAA
    AminoAcid::Tyrosine,      //TAC
    AminoAcid::Stop,          //TAG
    AminoAcid::Tyrosine,      //TAT
    AminoAcid::Serine,        //TCA
    AminoAcid::Serine,        //TCC
    AminoAcid::Serine,        //TCG
    AminoAcid::Serine,        //TCT
    AminoAcid::Stop,          //TGA
    AminoAcid::Cysteine,      //TGC
    AminoAcid::Tryptophan,    //TGG
    AminoAcid::Cysteine,      //TGT
    AminoAcid::Leucine,       //TTA
    AminoAcid::Phenylalanine, //TTC
    AminoAcid::Leucine,       //TTG
    AminoAcid::Phenylalanine, //TTT
];

/// Look up a codon in the standard genetic code
///
/// Lower case and RNA (`U`) codons are accepted. Returns `None` for anything
/// that is not exactly three nucleotides.
pub fn lookup(codon: &str) -> Option<AminoAcid> {
    if codon.len() != 3 {
        return None;
    }
    let mut index = 0;
    for c in codon.chars() {
        let v = match c.to_ascii_uppercase() {
            'A' => 0,
            'C' => 1,
            'G' => 2,
            'T' | 'U' => 3,
            _ => return None,
        };
        index <<= 2; // times 4
        index += v;
    }
    Some(GENETIC_CODE[index])
}

/// Translate a codon to its one-letter amino acid code
///
/// Stop codons become `*`. Malformed codons (wrong length, gaps, ambiguity
/// codes) become `X` and are never reported as an error. Callers that count
/// substitutions treat `X` like any other symbol.
pub fn translate(codon: &str) -> char {
    lookup(codon).map_or(UNKNOWN, |aa| aa.one_letter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_malformed() {
        assert_eq!(translate(""), 'X');
        assert_eq!(translate("A"), 'X');
        assert_eq!(translate("AT"), 'X');
        assert_eq!(translate("UAGA"), 'X');
        assert_eq!(translate("NOPE"), 'X');
        assert_eq!(translate("NNN"), 'X');
        assert_eq!(translate("A-G"), 'X');
        assert_eq!(translate("---"), 'X');
        assert_eq!(translate("RYA"), 'X');
    }

    #[test]
    fn test_translate_full_code() {
        let expected = [
            ("AAA", 'K'), ("AAC", 'N'), ("AAG", 'K'), ("AAT", 'N'),
            ("ACA", 'T'), ("ACC", 'T'), ("ACG", 'T'), ("ACT", 'T'),
            ("AGA", 'R'), ("AGC", 'S'), ("AGG", 'R'), ("AGT", 'S'),
            ("ATA", 'I'), ("ATC", 'I'), ("ATG", 'M'), ("ATT", 'I'),
            ("CAA", 'Q'), ("CAC", 'H'), ("CAG", 'Q'), ("CAT", 'H'),
            ("CCA", 'P'), ("CCC", 'P'), ("CCG", 'P'), ("CCT", 'P'),
            ("CGA", 'R'), ("CGC", 'R'), ("CGG", 'R'), ("CGT", 'R'),
            ("CTA", 'L'), ("CTC", 'L'), ("CTG", 'L'), ("CTT", 'L'),
            ("GAA", 'E'), ("GAC", 'D'), ("GAG", 'E'), ("GAT", 'D'),
            ("GCA", 'A'), ("GCC", 'A'), ("GCG", 'A'), ("GCT", 'A'),
            ("GGA", 'G'), ("GGC", 'G'), ("GGG", 'G'), ("GGT", 'G'),
            ("GTA", 'V'), ("GTC", 'V'), ("GTG", 'V'), ("GTT", 'V'),
            ("TAA", '*'), ("TAC", 'Y'), ("TAG", '*'), ("TAT", 'Y'),
            ("TCA", 'S'), ("TCC", 'S'), ("TCG", 'S'), ("TCT", 'S'),
            ("TGA", '*'), ("TGC", 'C'), ("TGG", 'W'), ("TGT", 'C'),
            ("TTA", 'L'), ("TTC", 'F'), ("TTG", 'L'), ("TTT", 'F'),
        ];
        assert_eq!(expected.len(), 64);
        for (codon, aa) in expected.iter() {
            assert_eq!(translate(codon), *aa, "codon {}", codon);
        }
    }

    #[test]
    fn test_translate_case_and_rna() {
        assert_eq!(translate("atg"), 'M');
        assert_eq!(translate("tAa"), '*');
        assert_eq!(translate("AUU"), 'I');
        assert_eq!(translate("GCU"), 'A');
        assert_eq!(translate("UUU"), 'F');
        assert_eq!(translate("UAU"), 'Y');
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("TGG"), Some(AminoAcid::Tryptophan));
        assert_eq!(lookup("TGA"), Some(AminoAcid::Stop));
        assert_eq!(lookup("TG"), None);
    }
}
