#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccount<'a> {
    pub uid: &'a str,
    pub email: Option<&'a str>,
    pub disabled: bool,
}

#[derive(Queryable)]
pub struct AccountEntity {
    pub uid: String,
    pub email: Option<String>,
    pub disabled: bool,
}

#[derive(Insertable)]
#[diesel(table_name = profiles)]
pub struct NewProfile<'a> {
    pub uid: &'a str,
    pub role: &'a str,
    pub status: &'a str,
    pub disabled_at: Option<i64>,
    pub disabled_by: Option<&'a str>,
}

#[derive(Queryable)]
pub struct ProfileEntity {
    pub uid: String,
    pub role: String,
    pub status: String,
    pub disabled_at: Option<i64>,
    pub disabled_by: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = documents)]
pub struct NewDocument<'a> {
    pub owner_uid: &'a str,
    pub collection: &'a str,
    pub id: &'a str,
    pub content: &'a str,
}
