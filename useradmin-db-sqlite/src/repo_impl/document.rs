use super::*;

// Keeps the number of bound parameters per statement
// well below the limit of SQLite.
pub(super) const DELETE_CHUNK_SIZE: usize = 500;

impl<'a> SubcollectionRepo for DbReadWrite<'a> {
    fn add_document(&self, owner: &Uid, collection: &str, document: &Document) -> Result<()> {
        add_document(&mut self.sqlite_conn(), owner, collection, document)
    }

    fn list_document_ids(&self, owner: &Uid, collection: &str) -> Result<Vec<DocumentId>> {
        list_document_ids(&mut self.sqlite_conn(), owner, collection)
    }

    fn delete_documents(
        &self,
        owner: &Uid,
        collection: &str,
        ids: &[DocumentId],
    ) -> Result<usize> {
        delete_documents(&mut self.sqlite_conn(), owner, collection, ids)
    }
}

fn add_document(
    conn: &mut SqliteConnection,
    owner: &Uid,
    collection: &str,
    d: &Document,
) -> Result<()> {
    let new_document = models::NewDocument {
        owner_uid: owner.as_str(),
        collection,
        id: d.id.as_str(),
        content: &d.content,
    };
    diesel::insert_into(schema::documents::table)
        .values(&new_document)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn list_document_ids(
    conn: &mut SqliteConnection,
    owner: &Uid,
    collection: &str,
) -> Result<Vec<DocumentId>> {
    use schema::documents::dsl;
    Ok(dsl::documents
        .select(dsl::id)
        .filter(dsl::owner_uid.eq(owner.as_str()))
        .filter(dsl::collection.eq(collection))
        .order_by(dsl::rowid)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(DocumentId::from)
        .collect())
}

fn delete_documents(
    conn: &mut SqliteConnection,
    owner: &Uid,
    collection: &str,
    ids: &[DocumentId],
) -> Result<usize> {
    use schema::documents::dsl;
    if ids.is_empty() {
        return Ok(0);
    }
    conn.transaction::<_, DieselError, _>(|conn| {
        let mut total = 0;
        for chunk in ids.chunks(DELETE_CHUNK_SIZE) {
            let chunk_ids: Vec<_> = chunk.iter().map(DocumentId::as_str).collect();
            total += diesel::delete(
                dsl::documents
                    .filter(dsl::owner_uid.eq(owner.as_str()))
                    .filter(dsl::collection.eq(collection))
                    .filter(dsl::id.eq_any(chunk_ids)),
            )
            .execute(conn)?;
        }
        Ok(total)
    })
    .map_err(from_diesel_err)
}
