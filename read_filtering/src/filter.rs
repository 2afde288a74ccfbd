//! The filter pass.
use super::ExclusionList;
use bio::io::fasta;

/// Outcome of one pass. `kept` keeps the input order, `excluded_ids` the
/// order of encounter.
#[derive(Debug, Clone, Default)]
pub struct FilterResult {
    total: usize,
    kept: Vec<fasta::Record>,
    excluded_ids: Vec<String>,
}

impl FilterResult {
    fn classify(mut self, record: fasta::Record, exclusions: &ExclusionList) -> Self {
        self.total += 1;
        if exclusions.is_excluded(record.id()) {
            if log_enabled!(log::Level::Trace) {
                let prefix = exclusions.first_match(record.id()).unwrap_or("");
                trace!("Exclude {} by {}", record.id(), prefix);
            }
            self.excluded_ids.push(record.id().to_string());
        } else {
            self.kept.push(record);
        }
        self
    }
    pub fn total(&self) -> usize {
        self.total
    }
    pub fn excluded_count(&self) -> usize {
        self.excluded_ids.len()
    }
    pub fn kept_count(&self) -> usize {
        self.total - self.excluded_count()
    }
    pub fn kept(&self) -> &[fasta::Record] {
        &self.kept
    }
    pub fn excluded_ids(&self) -> &[String] {
        &self.excluded_ids
    }
}

impl std::fmt::Display for FilterResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Total:{}\tExcluded:{}\tKept:{}",
            self.total,
            self.excluded_count(),
            self.kept_count()
        )
    }
}

/// Classify each record, in order, as kept or excluded.
/// A record matched by several prefixes is excluded once.
pub fn filter_records<I>(records: I, exclusions: &ExclusionList) -> FilterResult
where
    I: IntoIterator<Item = fasta::Record>,
{
    records
        .into_iter()
        .fold(FilterResult::default(), |result, record| {
            result.classify(record, exclusions)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaseMode;
    use rand::seq::SliceRandom;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    fn records(ids: &[&str]) -> Vec<fasta::Record> {
        ids.iter()
            .map(|id| fasta::Record::with_attrs(id, None, b"ACGT"))
            .collect()
    }
    fn list(prefixes: &[&str]) -> ExclusionList {
        ExclusionList::new(prefixes, CaseMode::CaseSensitive)
    }
    fn kept_ids(result: &FilterResult) -> Vec<&str> {
        result.kept().iter().map(|r| r.id()).collect()
    }
    #[test]
    fn abc_scenario() {
        let input = records(&["ABC001", "XYZ777", "ABC999"]);
        let result = filter_records(input, &list(&["ABC"]));
        assert_eq!(kept_ids(&result), vec!["XYZ777"]);
        assert_eq!(result.excluded_ids(), &["ABC001", "ABC999"]);
        assert_eq!(result.total(), 3);
        assert_eq!(result.excluded_count(), 2);
        assert_eq!(result.kept_count(), 1);
    }
    #[test]
    fn empty_list_keeps_everything() {
        let input = records(&["ABC001", "XYZ777", "ABC999"]);
        let result = filter_records(input, &list(&[]));
        assert_eq!(kept_ids(&result), vec!["ABC001", "XYZ777", "ABC999"]);
        assert_eq!(result.excluded_count(), 0);
        assert_eq!(result.kept_count(), 3);
    }
    #[test]
    fn whitespace_lines_keep_everything() {
        let input = records(&["ABC001", "XYZ777"]);
        let result = filter_records(input, &list(&["", "   ", "\t"]));
        assert_eq!(result.kept_count(), 2);
    }
    #[test]
    fn exact_identifier_is_excluded() {
        let input = records(&["ABC001", "XYZ777", "XYZ7770"]);
        let result = filter_records(input, &list(&["XYZ777"]));
        assert_eq!(kept_ids(&result), vec!["ABC001"]);
        assert_eq!(result.excluded_ids(), &["XYZ777", "XYZ7770"]);
    }
    #[test]
    fn overlapping_prefixes_exclude_once() {
        let input = records(&["ABC001", "XYZ777"]);
        let result = filter_records(input, &list(&["A", "AB", "ABC", "ABC"]));
        assert_eq!(result.excluded_ids(), &["ABC001"]);
        assert_eq!(result.excluded_count(), 1);
        assert_eq!(result.total(), 2);
    }
    #[test]
    fn empty_input() {
        let result = filter_records(Vec::<fasta::Record>::new(), &list(&["ABC"]));
        assert_eq!(result.total(), 0);
        assert_eq!(result.kept_count(), 0);
        assert!(result.excluded_ids().is_empty());
    }
    #[test]
    fn payload_passes_through() {
        let input = vec![fasta::Record::with_attrs("HMT-1", Some("desc x"), b"ACGTNN")];
        let result = filter_records(input, &list(&["ABC"]));
        let kept = result.kept();
        assert_eq!(kept[0].desc(), Some("desc x"));
        assert_eq!(kept[0].seq(), b"ACGTNN");
    }
    #[test]
    fn random_datasets() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(1_203_912);
        let alphabet = b"ACGX";
        let word = |rng: &mut Xoshiro256StarStar, max: usize| -> String {
            let len = rng.gen_range(1..=max);
            (0..len)
                .map(|_| *alphabet.choose(rng).unwrap() as char)
                .collect()
        };
        for _ in 0..100 {
            let num_reads = rng.gen_range(0..50);
            let ids: Vec<String> = (0..num_reads).map(|_| word(&mut rng, 6)).collect();
            let num_prefixes = rng.gen_range(0..5);
            let prefixes: Vec<String> = (0..num_prefixes).map(|_| word(&mut rng, 3)).collect();
            let exclusions = ExclusionList::new(&prefixes, CaseMode::CaseSensitive);
            let input: Vec<_> = ids
                .iter()
                .map(|id| fasta::Record::with_attrs(id, None, b"A"))
                .collect();
            let result = filter_records(input, &exclusions);
            assert_eq!(result.kept_count() + result.excluded_count(), result.total());
            assert_eq!(result.total(), ids.len());
            assert_eq!(result.kept().len(), result.kept_count());
            let matched = |id: &str| prefixes.iter().any(|p| id.starts_with(p.as_str()));
            assert!(result.kept().iter().all(|r| !matched(r.id())));
            assert!(result.excluded_ids().iter().all(|id| matched(id.as_str())));
            // Kept ids and excluded ids are both subsequences of the input.
            let mut kept = result.kept().iter().map(|r| r.id()).peekable();
            let mut excluded = result.excluded_ids().iter().peekable();
            for id in ids.iter() {
                if kept.peek() == Some(&id.as_str()) {
                    kept.next();
                } else {
                    assert_eq!(excluded.next(), Some(id));
                }
            }
            assert!(kept.peek().is_none());
            assert!(excluded.peek().is_none());
            // Filtering the output again excludes nothing.
            let again = filter_records(result.kept().to_vec(), &exclusions);
            assert_eq!(again.excluded_count(), 0);
        }
    }
}
