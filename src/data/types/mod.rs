pub mod amino_acids;
pub mod peptide;
pub mod rna;
