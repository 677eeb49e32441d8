//! The GraphQL schema: object types for [`Book`] and [`Author`], the query root and the resolvers
//! binding them to a [`Catalog`].
//!
//! Lists are published as nullable lists of nullable items (`[Book]`) to keep the schema
//! compatible with existing clients, even though resolvers never produce `null` entries.

use crate::catalog::{Author, Book, Catalog};
use async_graphql::{
    Context, EmptyMutation, EmptySubscription, Object, Schema, extensions::Tracing,
};

/// The executable schema.
pub type BookListSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema over `catalog`. This is meant to be done once per process; the returned
/// schema is cheap to clone.
#[inline]
#[must_use]
pub fn build_schema(catalog: &'static Catalog) -> BookListSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(catalog)
        .extension(Tracing)
        .finish()
}

/// The catalog attached by [`build_schema`].
fn catalog(ctx: &Context<'_>) -> &'static Catalog {
    // Every schema is built through `build_schema`, which always attaches the catalog.
    *ctx.data_unchecked::<&'static Catalog>()
}

/// Wrap items in the nullable list shape of the published schema.
#[allow(
    clippy::unnecessary_wraps,
    reason = "The published list types are nullable."
)]
fn nullable<T>(items: impl IntoIterator<Item = T>) -> Option<Vec<Option<T>>> {
    Some(items.into_iter().map(Some).collect())
}

#[Object]
impl Book {
    /// The ID of the book in THIS system
    async fn id(&self) -> i32 {
        self.id
    }

    /// The Title of the book.
    async fn title(&self) -> &str {
        self.title
    }

    /// The person(s) who wrote the book.
    async fn author(&self, ctx: &Context<'_>) -> Option<&'static Author> {
        catalog(ctx).author_of(self)
    }
}

#[Object]
impl Author {
    /// The ID of the Author in THIS system.
    async fn id(&self) -> i32 {
        self.id
    }

    /// The Author's last name.
    async fn lastname(&self) -> &str {
        self.lastname
    }

    /// The author's first name.
    async fn firstname(&self) -> &str {
        self.firstname
    }

    /// The author's full name.  This has been split into the firstname and lastname fields and will be removed in the short term future.
    #[graphql(deprecation = "use lastname, firstname")]
    #[allow(
        clippy::unnecessary_wraps,
        reason = "The published field type is nullable."
    )]
    async fn fullname(&self) -> Option<String> {
        Some(self.to_string())
    }

    /// The list of books by this author in this system.
    async fn books(&self, ctx: &Context<'_>) -> Option<Vec<Option<&'static Book>>> {
        nullable(catalog(ctx).books_by(self))
    }
}

/// Queries retrieve data from the system.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryRoot;

/// Queries retrieve data from the system.
#[Object(name = "Query")]
impl QueryRoot {
    /// Get the list of books in the system.
    async fn books(&self, ctx: &Context<'_>) -> Option<Vec<Option<&'static Book>>> {
        nullable(catalog(ctx).books())
    }

    /// Get a book by its ID.
    #[graphql(name = "booksByID")]
    async fn books_by_id(&self, ctx: &Context<'_>, id: i32) -> Option<&'static Book> {
        catalog(ctx).book(id)
    }

    /// Get the list of authors in this system.
    async fn authors(&self, ctx: &Context<'_>) -> Option<Vec<Option<&'static Author>>> {
        nullable(catalog(ctx).authors())
    }

    /// Get an author by its ID
    #[graphql(name = "authorsByID")]
    async fn authors_by_id(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> Option<Vec<Option<&'static Author>>> {
        nullable(catalog(ctx).authors_with_id(id))
    }

    /// Get the authors with the last name of <lastname>
    async fn authors_by_lastname(
        &self,
        ctx: &Context<'_>,
        lastname: String,
    ) -> Option<Vec<Option<&'static Author>>> {
        nullable(catalog(ctx).authors_by_lastname(&lastname))
    }

    /// Get the authors with the First name of <firstname> and last name of <lastname>.
    async fn authors_by_name(
        &self,
        ctx: &Context<'_>,
        firstname: String,
        lastname: String,
    ) -> Option<Vec<Option<&'static Author>>> {
        nullable(catalog(ctx).authors_by_name(&firstname, &lastname))
    }
}
