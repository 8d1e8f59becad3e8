//! Categoría gramatical: persona y número
//!
//! Un registro de aridad fija con un campo por persona gramatical.
//! El francés usa seis personas; el español añade el voseo ("vos") como
//! séptima, entre la segunda y la tercera del singular.

use serde::Serialize;

use crate::error::ConjugationError;

/// Persona gramatical en orden canónico
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Person {
    FirstSingular,
    SecondSingular,
    /// Segunda persona del singular regional (voseo)
    SecondSingularRegional,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Person {
    pub fn is_plural(self) -> bool {
        matches!(
            self,
            Person::FirstPlural | Person::SecondPlural | Person::ThirdPlural
        )
    }

    /// Persona del plural que comparte fila con esta en la vista a dos columnas
    pub fn plural_counterpart(self) -> Option<Person> {
        match self {
            Person::FirstSingular => Some(Person::FirstPlural),
            Person::SecondSingular => Some(Person::SecondPlural),
            Person::ThirdSingular => Some(Person::ThirdPlural),
            _ => None,
        }
    }
}

/// Acceso uniforme a las categorías de distinta aridad
pub trait PersonSlots: Sized {
    type Item;

    /// Personas en orden canónico; su longitud es la aridad
    const PERSONS: &'static [Person];

    /// Construye la categoría a partir de exactamente `PERSONS.len()` valores
    fn from_values(values: Vec<Self::Item>) -> Result<Self, ConjugationError>;

    fn get(&self, person: Person) -> Option<&Self::Item>;

    fn arity() -> usize {
        Self::PERSONS.len()
    }

    fn values(&self) -> Vec<&Self::Item> {
        Self::PERSONS.iter().filter_map(|p| self.get(*p)).collect()
    }

    fn entries(&self) -> Vec<(Person, &Self::Item)> {
        Self::PERSONS
            .iter()
            .filter_map(|p| self.get(*p).map(|item| (*p, item)))
            .collect()
    }
}

/// Categoría de seis personas (francés)
///
/// fp = primera persona, sp = segunda, tp = tercera; s = singular, p = plural
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category<T> {
    pub fps: T,
    pub sps: T,
    pub tps: T,
    pub fpp: T,
    pub spp: T,
    pub tpp: T,
}

impl<T> Category<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Category<U> {
        Category {
            fps: f(self.fps),
            sps: f(self.sps),
            tps: f(self.tps),
            fpp: f(self.fpp),
            spp: f(self.spp),
            tpp: f(self.tpp),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.fps, &self.sps, &self.tps, &self.fpp, &self.spp, &self.tpp].into_iter()
    }
}

impl<T> From<[T; 6]> for Category<T> {
    fn from([fps, sps, tps, fpp, spp, tpp]: [T; 6]) -> Self {
        Self { fps, sps, tps, fpp, spp, tpp }
    }
}

impl<T> IntoIterator for Category<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 6>;

    fn into_iter(self) -> Self::IntoIter {
        [self.fps, self.sps, self.tps, self.fpp, self.spp, self.tpp].into_iter()
    }
}

impl<T> PersonSlots for Category<T> {
    type Item = T;

    const PERSONS: &'static [Person] = &[
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    fn from_values(values: Vec<T>) -> Result<Self, ConjugationError> {
        let found = values.len();
        let slots: [T; 6] = values
            .try_into()
            .map_err(|_| ConjugationError::Arity { expected: 6, found })?;
        Ok(Self::from(slots))
    }

    fn get(&self, person: Person) -> Option<&T> {
        match person {
            Person::FirstSingular => Some(&self.fps),
            Person::SecondSingular => Some(&self.sps),
            Person::SecondSingularRegional => None,
            Person::ThirdSingular => Some(&self.tps),
            Person::FirstPlural => Some(&self.fpp),
            Person::SecondPlural => Some(&self.spp),
            Person::ThirdPlural => Some(&self.tpp),
        }
    }
}

/// Categoría de siete personas (español): `spsv` es la forma de "vos"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpanishCategory<T> {
    pub fps: T,
    pub sps: T,
    pub spsv: T,
    pub tps: T,
    pub fpp: T,
    pub spp: T,
    pub tpp: T,
}

impl<T> SpanishCategory<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> SpanishCategory<U> {
        SpanishCategory {
            fps: f(self.fps),
            sps: f(self.sps),
            spsv: f(self.spsv),
            tps: f(self.tps),
            fpp: f(self.fpp),
            spp: f(self.spp),
            tpp: f(self.tpp),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [
            &self.fps, &self.sps, &self.spsv, &self.tps, &self.fpp, &self.spp, &self.tpp,
        ]
        .into_iter()
    }
}

impl<T> From<[T; 7]> for SpanishCategory<T> {
    fn from([fps, sps, spsv, tps, fpp, spp, tpp]: [T; 7]) -> Self {
        Self { fps, sps, spsv, tps, fpp, spp, tpp }
    }
}

impl<T> IntoIterator for SpanishCategory<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 7>;

    fn into_iter(self) -> Self::IntoIter {
        [
            self.fps, self.sps, self.spsv, self.tps, self.fpp, self.spp, self.tpp,
        ]
        .into_iter()
    }
}

impl<T> PersonSlots for SpanishCategory<T> {
    type Item = T;

    const PERSONS: &'static [Person] = &[
        Person::FirstSingular,
        Person::SecondSingular,
        Person::SecondSingularRegional,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    fn from_values(values: Vec<T>) -> Result<Self, ConjugationError> {
        let found = values.len();
        let slots: [T; 7] = values
            .try_into()
            .map_err(|_| ConjugationError::Arity { expected: 7, found })?;
        Ok(Self::from(slots))
    }

    fn get(&self, person: Person) -> Option<&T> {
        match person {
            Person::FirstSingular => Some(&self.fps),
            Person::SecondSingular => Some(&self.sps),
            Person::SecondSingularRegional => Some(&self.spsv),
            Person::ThirdSingular => Some(&self.tps),
            Person::FirstPlural => Some(&self.fpp),
            Person::SecondPlural => Some(&self.spp),
            Person::ThirdPlural => Some(&self.tpp),
        }
    }
}
