use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::{
    Category, NewPantryItemRequest, PantryItem, SaveRecipeRequest, SavedRecipe,
    UpdatePantryItemRequest, User,
};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// PostgreSQL store for users, pantry items, categories, and saved recipes
pub struct PantryStore {
    pool: PgPool,
}

impl PantryStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    // --- Users ---

    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<User, StoreError> {
        let query = r#"
            INSERT INTO users (email, password_hash, name)
            VALUES ($1, $2, $3)
            RETURNING id, email, name, password_hash, created_at
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .bind(password_hash)
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(user_from_row(&row))
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let query = r#"
            SELECT id, email, name, password_hash, created_at
            FROM users
            WHERE email = $1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    pub async fn get_user(&self, id: i32) -> Result<Option<User>, StoreError> {
        let query = r#"
            SELECT id, email, name, password_hash, created_at
            FROM users
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    // --- Categories ---

    pub async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query("SELECT id, name, icon FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Category {
                id: row.get("id"),
                name: row.get("name"),
                icon: row.get("icon"),
            })
            .collect())
    }

    // --- Pantry items ---

    /// All pantry items for a user, soonest expiry first, undated items last
    pub async fn list_items(&self, user_id: i32) -> Result<Vec<PantryItem>, StoreError> {
        let query = r#"
            SELECT pi.id, pi.user_id, pi.name, pi.quantity, pi.unit, pi.category_id,
                   pi.expiry_date, pi.created_at, pi.updated_at,
                   c.name AS category_name, c.icon AS category_icon
            FROM pantry_items pi
            LEFT JOIN categories c ON pi.category_id = c.id
            WHERE pi.user_id = $1
            ORDER BY pi.expiry_date ASC NULLS LAST
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(item_from_row).collect())
    }

    /// Items expiring within the given number of days
    pub async fn expiring_items(
        &self,
        user_id: i32,
        within_days: i32,
    ) -> Result<Vec<PantryItem>, StoreError> {
        let query = r#"
            SELECT pi.id, pi.user_id, pi.name, pi.quantity, pi.unit, pi.category_id,
                   pi.expiry_date, pi.created_at, pi.updated_at,
                   c.name AS category_name, c.icon AS category_icon
            FROM pantry_items pi
            LEFT JOIN categories c ON pi.category_id = c.id
            WHERE pi.user_id = $1
              AND pi.expiry_date IS NOT NULL
              AND pi.expiry_date <= CURRENT_DATE + $2 * INTERVAL '1 day'
            ORDER BY pi.expiry_date ASC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .bind(within_days)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(item_from_row).collect())
    }

    /// Just the item names, the only pantry data the matcher consumes
    pub async fn pantry_names(&self, user_id: i32) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query("SELECT name FROM pantry_items WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(|row| row.get("name")).collect())
    }

    pub async fn create_item(
        &self,
        user_id: i32,
        item: &NewPantryItemRequest,
    ) -> Result<PantryItem, StoreError> {
        let query = r#"
            INSERT INTO pantry_items (user_id, name, quantity, unit, category_id, expiry_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .bind(&item.name)
            .bind(item.quantity.unwrap_or(1.0))
            .bind(item.unit.as_deref().unwrap_or("piece"))
            .bind(item.category_id)
            .bind(item.expiry_date)
            .fetch_one(&self.pool)
            .await?;

        let id: i32 = row.get("id");
        self.fetch_item(id).await
    }

    /// Partial update; absent fields keep their current value
    pub async fn update_item(
        &self,
        user_id: i32,
        id: i32,
        update: &UpdatePantryItemRequest,
    ) -> Result<Option<PantryItem>, StoreError> {
        let query = r#"
            UPDATE pantry_items
            SET name = COALESCE($1, name),
                quantity = COALESCE($2, quantity),
                unit = COALESCE($3, unit),
                category_id = COALESCE($4, category_id),
                expiry_date = COALESCE($5, expiry_date),
                updated_at = NOW()
            WHERE id = $6 AND user_id = $7
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(update.name.as_deref())
            .bind(update.quantity)
            .bind(update.unit.as_deref())
            .bind(update.category_id)
            .bind(update.expiry_date)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let id: i32 = row.get("id");
                Ok(Some(self.fetch_item(id).await?))
            }
            None => Ok(None),
        }
    }

    pub async fn delete_item(&self, user_id: i32, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM pantry_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn fetch_item(&self, id: i32) -> Result<PantryItem, StoreError> {
        let query = r#"
            SELECT pi.id, pi.user_id, pi.name, pi.quantity, pi.unit, pi.category_id,
                   pi.expiry_date, pi.created_at, pi.updated_at,
                   c.name AS category_name, c.icon AS category_icon
            FROM pantry_items pi
            LEFT JOIN categories c ON pi.category_id = c.id
            WHERE pi.id = $1
        "#;

        let row = sqlx::query(query).bind(id).fetch_one(&self.pool).await?;

        Ok(item_from_row(&row))
    }

    // --- Saved recipes ---

    /// Bookmark a recipe; returns None when it was already saved
    pub async fn save_recipe(
        &self,
        user_id: i32,
        save: &SaveRecipeRequest,
    ) -> Result<Option<SavedRecipe>, StoreError> {
        let query = r#"
            INSERT INTO saved_recipes (user_id, recipe_api_id, title, image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, recipe_api_id) DO NOTHING
            RETURNING id, user_id, recipe_api_id, title, image_url, saved_at
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .bind(&save.recipe_api_id)
            .bind(&save.title)
            .bind(save.image_url.as_deref())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(saved_from_row))
    }

    pub async fn saved_recipes(&self, user_id: i32) -> Result<Vec<SavedRecipe>, StoreError> {
        let query = r#"
            SELECT id, user_id, recipe_api_id, title, image_url, saved_at
            FROM saved_recipes
            WHERE user_id = $1
            ORDER BY saved_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(saved_from_row).collect())
    }

    pub async fn delete_saved(&self, user_id: i32, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM saved_recipes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn user_from_row(row: &sqlx::postgres::PgRow) -> User {
    User {
        id: row.get("id"),
        email: row.get("email"),
        name: row.get("name"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
    }
}

fn item_from_row(row: &sqlx::postgres::PgRow) -> PantryItem {
    PantryItem {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        quantity: row.get("quantity"),
        unit: row.get("unit"),
        category_id: row.get("category_id"),
        category_name: row.get("category_name"),
        category_icon: row.get("category_icon"),
        expiry_date: row.get("expiry_date"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn saved_from_row(row: &sqlx::postgres::PgRow) -> SavedRecipe {
    SavedRecipe {
        id: row.get("id"),
        user_id: row.get("user_id"),
        recipe_api_id: row.get("recipe_api_id"),
        title: row.get("title"),
        image_url: row.get("image_url"),
        saved_at: row.get("saved_at"),
    }
}
