use bracket_stack::{is_balanced_str, EmptyStackError, Stack};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

const ALPHABET: &[char] = &['(', ')', '{', '}', '[', ']', 'a', 'b'];

/// Push 101 to 110, then pop, peek and size.
pub fn scripted_session() -> Result<(), EmptyStackError> {
    let mut stack: Stack<u32> = (101..=110).collect();
    println!("{:?}", stack);

    println!("{}", stack.pop()?); // 110
    println!("{}", stack.peek()?); // 109
    println!("{}", stack.size()); // 9
    println!("{:?}", stack);

    println!("--------------------------------------------------");
    check(&["a{b(c)d}ef", "a{bc]def"]);
    Ok(())
}

pub fn check<S: AsRef<str>>(texts: &[S]) {
    for text in texts {
        let text = text.as_ref();
        println!("{text}: {}", is_balanced_str(text));
    }
}

pub fn random_samples(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..=12);
            (0..len)
                .filter_map(|_| ALPHABET.choose(&mut rng).copied())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_reproducible() {
        let a = random_samples(16, 9);
        assert_eq!(a.len(), 16);
        assert_eq!(a, random_samples(16, 9));
        assert!(a
            .iter()
            .flat_map(|s| s.chars())
            .all(|c| ALPHABET.contains(&c)));
    }

    #[test]
    fn session_runs() {
        assert_eq!(scripted_session(), Ok(()));
    }
}
