//! Luhn checksum validation behind a `From` conversion for every input type
//! the checksum makes sense for.

pub struct Luhn {
    digits: Option<Vec<u8>>,
}

impl Luhn {
    /// Apply the Luhn check: double every second digit from the right
    /// (subtracting 9 on overflow) and require the sum to be divisible by
    /// ten. Inputs with fewer than two digits or any non-digit character
    /// are invalid.
    pub fn is_valid(&self) -> bool {
        let Some(ref digits) = self.digits else {
            return false;
        };
        if digits.len() < 2 {
            return false;
        }

        let sum: u32 = digits
            .iter()
            .rev()
            .enumerate()
            .map(|(i, &d)| {
                let mut v = d as u32;
                if i % 2 == 1 {
                    v *= 2;
                    if v > 9 {
                        v -= 9;
                    }
                }
                v
            })
            .sum();
        sum % 10 == 0
    }
}

impl From<&str> for Luhn {
    fn from(input: &str) -> Self {
        let mut digits = Vec::with_capacity(input.len());
        for c in input.chars() {
            if c.is_whitespace() {
                continue;
            }
            match c.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Luhn { digits: None },
            }
        }
        Luhn {
            digits: Some(digits),
        }
    }
}

impl From<String> for Luhn {
    fn from(input: String) -> Self {
        Luhn::from(input.as_str())
    }
}

macro_rules! impl_luhn_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Luhn {
                fn from(input: $t) -> Self {
                    let digits = input
                        .to_string()
                        .bytes()
                        .map(|b| b - b'0')
                        .collect();
                    Luhn { digits: Some(digits) }
                }
            }
        )*
    };
}

impl_luhn_from_unsigned!(u8, u16, u32, u64, usize);
