use crate::core::{movie, slide};
use crate::domain::model::{CarouselViewModel, DataLayerEntry, MovieItem, SlideItem};
use crate::domain::ports::{ContentNode, ContentStore};
use std::collections::BTreeMap;

pub const RESOURCE_TYPE: &str = "aem-cinema-react/components/carousel";

pub const PN_CONTENT_TYPE: &str = "contentType";
pub const NN_SLIDE_ASSETS: &str = "slideAssets";
pub const NN_MOVIE_ASSETS: &str = "movieAssets";

/// Maps each source through `adapt`, dropping the ones it rejects.
/// An absent source sequence gives an empty list.
pub fn adapt_all<S, T, I, F>(sources: Option<I>, mut adapt: F) -> Vec<T>
where
    I: IntoIterator<Item = S>,
    F: FnMut(S) -> Option<T>,
{
    let Some(sources) = sources else {
        return Vec::new();
    };

    let mut dropped = 0usize;
    let items: Vec<T> = sources
        .into_iter()
        .filter_map(|source| {
            let item = adapt(source);
            if item.is_none() {
                dropped += 1;
            }
            item
        })
        .collect();

    if dropped > 0 {
        tracing::debug!("Dropped {} carousel sources that did not adapt", dropped);
    }
    items
}

pub struct CarouselParts {
    pub slides: Vec<SlideItem>,
    pub movies: Vec<MovieItem>,
}

pub fn assemble<SS, MS, FS, FM>(
    slide_sources: Option<SS>,
    movie_sources: Option<MS>,
    adapt_slide: FS,
    adapt_movie: FM,
) -> CarouselParts
where
    SS: IntoIterator,
    MS: IntoIterator,
    FS: FnMut(SS::Item) -> Option<SlideItem>,
    FM: FnMut(MS::Item) -> Option<MovieItem>,
{
    CarouselParts {
        slides: adapt_all(slide_sources, adapt_slide),
        movies: adapt_all(movie_sources, adapt_movie),
    }
}

/// `<name>-<hash>` where the hash is the absolute 31-polynomial string hash
/// of the node path, so ids are stable across renders.
pub fn component_id(node: &dyn ContentNode) -> String {
    format_component_id(node.name(), path_hash(node.path()))
}

fn path_hash(path: &str) -> i32 {
    path.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

// i32::MIN has no positive counterpart and stays negative.
fn format_component_id(name: &str, hash: i32) -> String {
    format!("{}-{}", name, hash.wrapping_abs())
}

pub fn build_carousel(store: &dyn ContentStore, node: &dyn ContentNode) -> CarouselViewModel {
    tracing::debug!("Building carousel for {}", node.path());

    let slide_sources = node.child(NN_SLIDE_ASSETS).map(|n| n.children());
    let movie_sources = node.child(NN_MOVIE_ASSETS).map(|n| n.children());

    let CarouselParts { slides, movies } =
        assemble(slide_sources, movie_sources, slide::adapt, |item| {
            movie::adapt(store, item)
        });

    let id = component_id(node);
    let mut data_layer = BTreeMap::new();
    data_layer.insert(
        id.clone(),
        DataLayerEntry {
            resource_type: RESOURCE_TYPE.to_string(),
            id: id.clone(),
        },
    );

    tracing::debug!(
        "Carousel {} has {} slides and {} movies",
        id,
        slides.len(),
        movies.len()
    );

    CarouselViewModel {
        id,
        slides,
        movies,
        content_type: node.get(PN_CONTENT_TYPE),
        data_layer,
        exported_type: RESOURCE_TYPE,
    }
}
