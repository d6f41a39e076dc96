use super::*;

impl<'a> ProfileRepo for DbReadWrite<'a> {
    fn create_profile(&self, profile: &Profile) -> Result<()> {
        create_profile(&mut self.sqlite_conn(), profile)
    }

    fn get_profile(&self, uid: &Uid) -> Result<Profile> {
        get_profile(&mut self.sqlite_conn(), uid)
    }
    fn try_get_profile(&self, uid: &Uid) -> Result<Option<Profile>> {
        try_get_profile(&mut self.sqlite_conn(), uid)
    }

    fn delete_profile(&self, uid: &Uid) -> Result<()> {
        delete_profile(&mut self.sqlite_conn(), uid)
    }
    fn mark_profile_disabled(&self, uid: &Uid, disabled_by: &Uid) -> Result<Timestamp> {
        mark_profile_disabled(&mut self.sqlite_conn(), uid, disabled_by)
    }
}

fn create_profile(conn: &mut SqliteConnection, p: &Profile) -> Result<()> {
    let new_profile = models::NewProfile::from(p);
    diesel::insert_into(schema::profiles::table)
        .values(&new_profile)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_profile(conn: &mut SqliteConnection, uid: &Uid) -> Result<Profile> {
    try_get_profile(conn, uid)?.ok_or(repo::Error::NotFound)
}

fn try_get_profile(conn: &mut SqliteConnection, uid: &Uid) -> Result<Option<Profile>> {
    use schema::profiles::dsl;
    dsl::profiles
        .filter(dsl::uid.eq(uid.as_str()))
        .first::<models::ProfileEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(TryInto::try_into)
        .transpose()
}

fn delete_profile(conn: &mut SqliteConnection, uid: &Uid) -> Result<()> {
    use schema::profiles::dsl;
    let count = diesel::delete(dsl::profiles.filter(dsl::uid.eq(uid.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        log::debug!("No profile of {uid} to delete");
    }
    Ok(())
}

fn mark_profile_disabled(
    conn: &mut SqliteConnection,
    uid: &Uid,
    disabled_by: &Uid,
) -> Result<Timestamp> {
    use schema::profiles::dsl;
    let disabled_at = Timestamp::now();
    let count = diesel::update(dsl::profiles.filter(dsl::uid.eq(uid.as_str())))
        .set((
            dsl::status.eq(ProfileStatus::Disabled.as_ref()),
            dsl::disabled_at.eq(Some(disabled_at.as_millis())),
            dsl::disabled_by.eq(Some(disabled_by.as_str())),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected_row(count)?;
    Ok(disabled_at)
}
