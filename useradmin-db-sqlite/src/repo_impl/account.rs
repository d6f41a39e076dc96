use super::*;

impl<'a> IdentityRepo for DbReadWrite<'a> {
    fn create_account(&self, account: &Account) -> Result<()> {
        create_account(&mut self.sqlite_conn(), account)
    }

    fn get_account(&self, uid: &Uid) -> Result<Account> {
        get_account(&mut self.sqlite_conn(), uid)
    }
    fn get_account_by_email(&self, email: &EmailAddress) -> Result<Account> {
        get_account_by_email(&mut self.sqlite_conn(), email)
    }

    fn delete_account(&self, uid: &Uid) -> Result<()> {
        delete_account(&mut self.sqlite_conn(), uid)
    }
    fn set_account_disabled(&self, uid: &Uid, disabled: bool) -> Result<()> {
        set_account_disabled(&mut self.sqlite_conn(), uid, disabled)
    }
}

fn create_account(conn: &mut SqliteConnection, a: &Account) -> Result<()> {
    let new_account = models::NewAccount::from(a);
    diesel::insert_into(schema::accounts::table)
        .values(&new_account)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_account(conn: &mut SqliteConnection, uid: &Uid) -> Result<Account> {
    use schema::accounts::dsl;
    dsl::accounts
        .filter(dsl::uid.eq(uid.as_str()))
        .first::<models::AccountEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn get_account_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<Account> {
    use schema::accounts::dsl;
    dsl::accounts
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::AccountEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn delete_account(conn: &mut SqliteConnection, uid: &Uid) -> Result<()> {
    use schema::accounts::dsl;
    let count = diesel::delete(dsl::accounts.filter(dsl::uid.eq(uid.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected_row(count)
}

fn set_account_disabled(conn: &mut SqliteConnection, uid: &Uid, disabled: bool) -> Result<()> {
    use schema::accounts::dsl;
    let count = diesel::update(dsl::accounts.filter(dsl::uid.eq(uid.as_str())))
        .set(dsl::disabled.eq(disabled))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected_row(count)
}
