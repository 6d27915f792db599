use itertools::Itertools;

use crate::options::Options;

pub fn assemble(tokens: &[String], options: &Options) -> String {
    if tokens.is_empty() {
        return if options.verbose { "0 milliseconds" } else { "0ms" }.to_owned();
    }

    let separator = if options.colon_notation { ":" } else { " " };
    let count = options.unit_count.map_or(tokens.len(), |count| count.max(1));

    tokens.iter().take(count).join(separator)
}
