use crate::game::History;

/// Write the live branch as a transcript of flat cell indices, e.g. `"0 4 8"`.
///
/// The starting board contributes nothing, so a fresh game is the empty string.
/// [`crate::notation::parse_transcript`] reads the output back.
pub fn write_transcript(history: &History) -> String {
    history
        .iter()
        .filter_map(|(_, snapshot)| snapshot.last_move)
        .map(|coord| coord.index().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
