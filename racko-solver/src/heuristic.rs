use racko_common::game::Card;

use smallvec::SmallVec;

/// Estimates how many rack slots must still be replaced before the rack is
/// non-decreasing: the rack length minus the length of the longest
/// non-decreasing subsequence taken in original left-to-right order. Zero
/// iff the rack is already ordered.
pub fn min_replacements(rack: &[Card]) -> usize {
    rack.len() - longest_nondecreasing_len(rack)
}

// Patience algorithm: tails[k] holds the smallest value that can end a
// non-decreasing subsequence of length k + 1.
fn longest_nondecreasing_len(rack: &[Card]) -> usize {
    let mut tails: SmallVec<[Card; 16]> = SmallVec::new();
    for &card in rack {
        let idx = tails.partition_point(|&tail| tail <= card);
        if idx == tails.len() {
            tails.push(card);
        } else {
            tails[idx] = card;
        }
    }
    tails.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    use racko_common::game::is_ordered;

    fn cards(values: &[u8]) -> Vec<Card> {
        values.iter().copied().map(Card::new).collect()
    }

    // Exponential include/skip definition: at each position either extend
    // the candidate subsequence or skip the card, penalizing candidates
    // that fall out of order so they can never win the minimization.
    fn brute_force(rack: &[Card], i: usize, chosen: &mut Vec<Card>) -> usize {
        if !is_ordered(chosen) {
            rack.len() + 10
        } else if i == rack.len() {
            rack.len() - chosen.len()
        } else {
            chosen.push(rack[i]);
            let included = brute_force(rack, i + 1, chosen);
            chosen.pop();
            let skipped = brute_force(rack, i + 1, chosen);
            included.min(skipped)
        }
    }

    fn permutations(pool: &mut Vec<u8>, current: &mut Vec<u8>, out: &mut Vec<Vec<u8>>) {
        if pool.is_empty() {
            out.push(current.clone());
            return;
        }
        for i in 0..pool.len() {
            let value = pool.remove(i);
            current.push(value);
            permutations(pool, current, out);
            current.pop();
            pool.insert(i, value);
        }
    }

    #[test]
    fn test_min_replacements() {
        assert_eq!(min_replacements(&cards(&[])), 0);
        assert_eq!(min_replacements(&cards(&[5])), 0);
        assert_eq!(min_replacements(&cards(&[1, 2, 3, 4])), 0);
        assert_eq!(min_replacements(&cards(&[4, 3, 2, 1])), 3);
        assert_eq!(min_replacements(&cards(&[3, 1, 2, 7, 5, 6, 4])), 3);
        assert_eq!(min_replacements(&cards(&[10, 1, 2, 3, 40, 4])), 2);
    }

    #[test]
    fn test_zero_iff_ordered() {
        let racks = [
            vec![1, 2, 3],
            vec![2, 1, 3],
            vec![9, 8, 7],
            vec![1, 5, 2, 6],
        ];
        for values in racks {
            let rack = cards(&values);
            assert_eq!(min_replacements(&rack) == 0, is_ordered(&rack));
        }
    }

    #[test]
    fn test_matches_brute_force() {
        for n in 1..=8 {
            let mut pool: Vec<u8> = (1..=n).collect();
            let mut perms = vec![];
            permutations(&mut pool, &mut vec![], &mut perms);
            for perm in perms {
                let rack = cards(&perm);
                assert_eq!(
                    min_replacements(&rack),
                    brute_force(&rack, 0, &mut vec![]),
                    "mismatch on {perm:?}"
                );
            }
        }
    }
}
