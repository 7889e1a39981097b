use aws_sdk_databasemigration::{error::BuildError, types as dms};
use aws_sdk_ec2::types;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single name/values filter.
///
/// ```rust
/// use aws_lookup::common::filter;
///
/// let filter = filter::Filter {
///     name: "vpc-id".to_string(),
///     values: vec!["vpc-0123".to_string()],
/// };
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Filter {
    /// Filter name as understood by the service, e.g. `vpc-id` or `tag:Name`.
    pub name: String,
    /// Accepted values; an object matches when any value matches.
    pub values: Vec<String>,
}

/// Ordered list of filters sent with a describe request.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Filters(pub Vec<Filter>);

impl Filters {
    /// One single-valued filter per attribute, sorted by name.
    ///
    /// Attributes with an empty value are skipped and a repeated name keeps its
    /// last value.
    ///
    /// ```rust
    /// use aws_lookup::common::filter::Filters;
    ///
    /// let filters = Filters::attributes([("vpc-id", "vpc-0123"), ("association.main", "true")]);
    /// assert_eq!(filters.0[0].name, "association.main");
    /// ```
    pub fn attributes<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut attributes: IndexMap<String, String> = attributes
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .filter(|(_, value)| !value.is_empty())
            .collect();
        attributes.sort_keys();
        let filters = attributes
            .into_iter()
            .map(|(name, value)| Filter {
                name,
                values: vec![value],
            })
            .collect();
        Self(filters)
    }

    /// `tag:<key>` filters, sorted by key.
    pub fn tags<K, V>(tags: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        Self::attributes(
            tags.into_iter()
                .map(|(key, value)| (format!("tag:{}", key.as_ref()), value)),
        )
    }

    /// A single filter with several accepted values.
    pub fn custom<V>(name: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Self::default();
        }
        Self(vec![Filter {
            name: name.into(),
            values,
        }])
    }

    /// Appends the filters of `other`.
    pub fn and(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Whether no filter is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Filter> for types::Filter {
    fn from(filter: Filter) -> Self {
        types::Filter::builder()
            .name(filter.name)
            .set_values(Some(filter.values))
            .build()
    }
}

impl From<Filters> for Option<Vec<types::Filter>> {
    fn from(filters: Filters) -> Self {
        if filters.is_empty() {
            None
        } else {
            Some(filters.0.into_iter().map(Into::into).collect())
        }
    }
}

impl TryFrom<Filter> for dms::Filter {
    type Error = BuildError;

    fn try_from(filter: Filter) -> Result<Self, Self::Error> {
        dms::Filter::builder()
            .name(filter.name)
            .set_values(Some(filter.values))
            .build()
    }
}

impl TryFrom<Filters> for Option<Vec<dms::Filter>> {
    type Error = BuildError;

    fn try_from(filters: Filters) -> Result<Self, Self::Error> {
        if filters.is_empty() {
            return Ok(None);
        }
        let filters = filters
            .0
            .into_iter()
            .map(dms::Filter::try_from)
            .collect::<Result<_, _>>()?;
        Ok(Some(filters))
    }
}
