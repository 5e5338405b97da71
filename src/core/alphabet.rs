//! Letters offered on the on-screen keyboard

use rustc_hash::FxHashSet;

/// The Russian alphabet in keyboard order
pub const CYRILLIC: [char; 33] = [
    'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п', 'р', 'с',
    'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я',
];

/// Build the keyboard for a set of words
///
/// Starts with [`CYRILLIC`] and appends, in sorted order, any other letter the
/// words use, so banks extended with Latin words stay playable.
#[must_use]
pub fn keyboard_for<'a, I>(words: I) -> Vec<char>
where
    I: IntoIterator<Item = &'a str>,
{
    let base: FxHashSet<char> = CYRILLIC.iter().copied().collect();
    let mut extra: Vec<char> = words
        .into_iter()
        .flat_map(str::chars)
        .filter(|c| !base.contains(c))
        .collect::<FxHashSet<char>>()
        .into_iter()
        .collect();
    extra.sort_unstable();

    let mut keys = CYRILLIC.to_vec();
    keys.extend(extra);
    keys
}
