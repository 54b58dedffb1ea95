use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use super::{Error, PostService};
use crate::model::{Post, PostId};

pub type Database = sqlx::Pool<sqlx::Postgres>;

/// A post service backed by the `post` table in PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgPostService {
	database: Database,
}

#[derive(sqlx::FromRow)]
struct PostRow {
	id: String,
	user_id: String,
	title: String,
	description: String,
	content: String,
	date: String,
	image: String,
	is_featured: bool,
}

impl From<PostRow> for Post {
	fn from(row: PostRow) -> Self {
		Self {
			id: Some(PostId(row.id)),
			user_id: row.user_id,
			title: row.title,
			description: row.description,
			content: row.content,
			date: row.date,
			image: row.image,
			is_featured: row.is_featured,
		}
	}
}

impl PgPostService {
	pub fn new(database: Database) -> Self {
		Self { database }
	}

	/// Connects to `url` and applies pending migrations.
	pub async fn connect(url: &str) -> Result<Self, Error> {
		let database = PgPoolOptions::new().max_connections(5).connect(url).await?;

		sqlx::migrate!()
			.run(&database)
			.await
			.map_err(|error| Error::Database(error.into()))?;

		Ok(Self::new(database))
	}
}

#[axum::async_trait]
impl PostService for PgPostService {
	async fn list(&self) -> Result<Vec<Post>, Error> {
		let posts = sqlx::query_as::<_, PostRow>(
			r#"
				SELECT id, user_id, title, description, content, date, image, is_featured
				FROM post
				ORDER BY created_at DESC
			"#,
		)
		.fetch_all(&self.database)
		.await?;

		Ok(posts.into_iter().map(Post::from).collect())
	}

	async fn show(&self, id: &PostId) -> Result<Post, Error> {
		let post = sqlx::query_as::<_, PostRow>(
			r#"
				SELECT id, user_id, title, description, content, date, image, is_featured
				FROM post
				WHERE id = $1
			"#,
		)
		.bind(id.as_str())
		.fetch_optional(&self.database)
		.await?;

		post.map(Post::from)
			.ok_or_else(|| Error::UnknownPost(id.clone()))
	}

	async fn store(&self, post: Post) -> Result<(), Error> {
		sqlx::query(
			r#"
				INSERT INTO post (id, user_id, title, description, content, date, image, is_featured)
				VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
			"#,
		)
		.bind(Uuid::new_v4().to_string())
		.bind(&post.user_id)
		.bind(&post.title)
		.bind(&post.description)
		.bind(&post.content)
		.bind(&post.date)
		.bind(&post.image)
		.bind(post.is_featured)
		.execute(&self.database)
		.await?;

		Ok(())
	}

	async fn update(&self, post: Post) -> Result<(), Error> {
		let id = post.id.ok_or(Error::MissingId)?;
		let result = sqlx::query(
			r#"
				UPDATE post
				SET user_id = $2, title = $3, description = $4, content = $5,
					date = $6, image = $7, is_featured = $8
				WHERE id = $1
			"#,
		)
		.bind(id.as_str())
		.bind(&post.user_id)
		.bind(&post.title)
		.bind(&post.description)
		.bind(&post.content)
		.bind(&post.date)
		.bind(&post.image)
		.bind(post.is_featured)
		.execute(&self.database)
		.await?;

		if result.rows_affected() == 0 {
			return Err(Error::UnknownPost(id));
		}

		Ok(())
	}
}
