use serde::{Deserialize, Serialize};
use crate::models::listing::Listing;

/// Estado completo del dashboard (se serializa entero bajo una sola clave)
///
/// Sin `#[serde(default)]`: un blob al que le falta una sección se trata
/// como corrupto, no se mezcla con valores por defecto.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    /// Anuncios subidos por el usuario, en orden de inserción
    pub uploaded_properties: Vec<Listing>,
    /// Vistos recientemente, el más reciente primero
    pub recently_viewed: Vec<Listing>,
    /// Ids favoritos en orden de inserción, sin duplicados
    pub favorites: Vec<String>,
}

impl DashboardState {
    /// Buscar anuncio subido por id (búsqueda lineal)
    pub fn find_uploaded(&self, id: &str) -> Option<&Listing> {
        self.uploaded_properties.iter().find(|l| l.id == id)
    }

    pub fn find_uploaded_mut(&mut self, id: &str) -> Option<&mut Listing> {
        self.uploaded_properties.iter_mut().find(|l| l.id == id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|fav| fav == id)
    }

    /// Favoritos resueltos contra los anuncios subidos; los huérfanos se omiten
    pub fn favorite_listings(&self) -> impl Iterator<Item = &Listing> + '_ {
        self.favorites.iter().filter_map(|id| self.find_uploaded(id))
    }

    /// Quita el anuncio y su favorito. Devuelve true si algo cambió.
    pub fn remove_listing(&mut self, id: &str) -> bool {
        let before = (self.uploaded_properties.len(), self.favorites.len());
        self.uploaded_properties.retain(|l| l.id != id);
        self.favorites.retain(|fav| fav != id);
        before != (self.uploaded_properties.len(), self.favorites.len())
    }

    /// Invierte la pertenencia de `id` a favoritos. Devuelve el nuevo estado.
    pub fn flip_favorite(&mut self, id: &str) -> bool {
        if self.is_favorite(id) {
            self.favorites.retain(|fav| fav != id);
            false
        } else {
            self.favorites.push(id.to_string());
            true
        }
    }

    /// Inserta al frente de vistos recientemente, reemplazando la entrada previa
    pub fn push_recently_viewed(&mut self, listing: Listing) {
        self.recently_viewed.retain(|l| l.id != listing.id);
        self.recently_viewed.insert(0, listing);
    }
}
