//! Codon lookup with IUPAC shorthand support.
//!
//! The table borrows its codon and protein names for `'a`, so lookups hand
//! back the original `&'a str` slices. Shorthand letters (R, Y, N, ...)
//! expand to every concrete nucleotide they stand for; a shorthand codon
//! resolves to whichever concrete expansion the table knows.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error;

pub struct CodonsInfo<'a> {
    names: HashMap<&'a str, &'a str>,
}

pub fn parse<'a>(pairs: Vec<(&'a str, &'a str)>) -> CodonsInfo<'a> {
    CodonsInfo {
        names: pairs.into_iter().collect(),
    }
}

fn expansions(shorthand: char) -> Result<&'static [char], Error> {
    Ok(match shorthand {
        'A' => &['A'],
        'C' => &['C'],
        'G' => &['G'],
        'T' => &['T'],
        'R' => &['A', 'G'],
        'Y' => &['C', 'T'],
        'M' => &['A', 'C'],
        'K' => &['G', 'T'],
        'S' => &['C', 'G'],
        'W' => &['A', 'T'],
        'H' => &['A', 'C', 'T'],
        'B' => &['C', 'G', 'T'],
        'V' => &['A', 'C', 'G'],
        'D' => &['A', 'G', 'T'],
        'N' => &['A', 'C', 'G', 'T'],
        _ => return Err(Error),
    })
}

impl<'a> CodonsInfo<'a> {
    pub fn name_for(&self, codon: &str) -> Result<&'a str, Error> {
        if codon.len() != 3 {
            return Err(Error);
        }
        if let Some(&name) = self.names.get(codon) {
            return Ok(name);
        }

        // expand shorthand letters and take the first known concrete codon
        let sets: Vec<&[char]> = codon
            .chars()
            .map(expansions)
            .collect::<Result<_, _>>()?;
        for &a in sets[0] {
            for &b in sets[1] {
                for &c in sets[2] {
                    let concrete: String = [a, b, c].iter().collect();
                    if let Some(&name) = self.names.get(concrete.as_str()) {
                        return Ok(name);
                    }
                }
            }
        }
        Err(Error)
    }

    /// Translate a strand codon by codon, stopping at a stop codon.
    pub fn of_rna(&self, rna: &str) -> Result<Vec<&'a str>, Error> {
        let mut proteins = Vec::new();
        let bytes = rna.as_bytes();
        for chunk in bytes.chunks(3) {
            if chunk.len() != 3 {
                return Err(Error);
            }
            let codon = std::str::from_utf8(chunk).map_err(|_| Error)?;
            let name = self.name_for(codon)?;
            if name == "stop codon" {
                break;
            }
            proteins.push(name);
        }
        Ok(proteins)
    }
}
