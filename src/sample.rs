use rand::Rng;

pub const SAMPLE_SIZE: usize = 19;

/// Draws `count` URLs uniformly at random, with replacement; duplicates are
/// expected output. The draw range stops one short of the list end, so the
/// final sitemap entry is never selected.
///
/// Panics if `courses` holds fewer than two entries; callers guard for that
/// before sampling.
pub fn sample_course_urls<R: Rng>(rng: &mut R, courses: &[String], count: usize) -> Vec<String> {
    (0..count)
        .map(|_| courses[rng.random_range(0..courses.len() - 1)].clone())
        .collect()
}
