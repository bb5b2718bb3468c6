use crate::core::fragment::{self, MOVIE_FIELDS};
use crate::domain::model::MovieItem;
use crate::domain::ports::{ContentNode, ContentStore};

pub const PN_FRAGMENT_PATH: &str = "fragmentPath";

/// Builds a movie entry from an item node that references a movie fragment.
///
/// Always yields an item: when the fragment cannot be read all of its
/// fields are absent and only `fragmentPath` is carried through.
pub fn adapt(store: &dyn ContentStore, node: &dyn ContentNode) -> Option<MovieItem> {
    let fragment_path: Option<String> = node.get(PN_FRAGMENT_PATH);
    tracing::debug!("Adapting movie item {}", node.path());

    let mut fields = fragment::extract(store, fragment_path.as_deref(), &MOVIE_FIELDS);

    Some(MovieItem {
        poster: fields.take("poster"),
        title: fields.take("title"),
        age_group: fields.take("ageGroup"),
        gender: fields.take("gender"),
        movie_time: fields.take("movieTime"),
        fragment_path,
    })
}
