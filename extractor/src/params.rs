use std::borrow::Cow;

type ParamsMapInner = Vec<(String, String)>;

/// An ordered map of query parameter names to values.
///
/// Names are unique. A name keeps the position where it was first inserted;
/// inserting it again replaces the value, so the last occurrence wins.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ParamsMap(ParamsMapInner);

impl ParamsMap {
    /// Creates an empty map.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with the given capacity.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Inserts a value into the map, replacing any existing value for that name.
    ///
    /// Returns the previous value, if there was one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        let name = name.into();
        let value = value.into();
        if let Some(prev) = self.0.iter_mut().find(|(n, _)| n == &name) {
            Some(std::mem::replace(&mut prev.1, value))
        } else {
            self.0.push((name, value));
            None
        }
    }

    /// Gets the value stored for this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v.as_str()))
    }

    /// Whether a value is stored for this name.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes every parameter.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// The parameter names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|(n, _)| n.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for ParamsMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);

        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl<'a> Extend<(Cow<'a, str>, Cow<'a, str>)> for ParamsMap {
    fn extend<T: IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>>(
        &mut self,
        iter: T,
    ) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for ParamsMap {
    type Item = (String, String);
    type IntoIter = ParamsMapIter;

    fn into_iter(self) -> Self::IntoIter {
        ParamsMapIter(self.0.into_iter())
    }
}

/// An iterator over the names and values of a [`ParamsMap`].
#[derive(Debug)]
pub struct ParamsMapIter(<ParamsMapInner as IntoIterator>::IntoIter);

impl Iterator for ParamsMapIter {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for ParamsMapIter {}
