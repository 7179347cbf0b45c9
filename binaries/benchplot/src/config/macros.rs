/// A macro for `benchplot`'s config structs. This macro generates a function that
/// inserts toml comments, created from the fields' doc comments, into a document.
///
/// # Attributes
/// - `#[child = true]`: writes the doc comments for all fields in the child struct.
///
/// # Invariants
/// Required for this macro to work:
///
/// - struct must implement [`Default`] and `serde`
/// - None of the fields can be [`Option`]
///
/// # Documentation
/// Consider using the following style when adding documentation:
///
/// ```rust
/// struct Config {
///     /// BRIEF DESCRIPTION.
///     ///
///     /// (optional) LONGER DESCRIPTION.
///     ///
///     /// Type         | (optional) FIELD TYPE
///     /// Valid values | EXPRESSION REPRESENTING VALID VALUES
///     /// Examples     | (optional) A FEW EXAMPLE VALUES
///     field: (),
/// }
/// ```
///
/// Field values with a `##` attribute (e.g. `##[serde(with = "...")]`)
/// have that attribute applied to the generated field.
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[child = $child:literal])?
                $(#[doc = $doc:expr])*
                $(##[$field_meta:meta])*
                $field_vis:vis $field:ident: $field_ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $name {
            /// Prefix each field of `doc` with its doc comment.
            $vis fn write_docs(doc: &mut dyn ::toml_edit::TableLike) {
                $(
                    {
                        let key_str = stringify!($field);

                        let field_prefix = [ $(
                            format!("##{}\n", $doc),
                        )*].concat();

                        $(
                        if $child {
                            if let Some(child) = doc
                                .get_mut(key_str)
                                .and_then(::toml_edit::Item::as_table_like_mut)
                            {
                                <$field_ty>::write_docs(child);
                            }
                        }
                        )?

                        if let Some(table) = doc.get_mut(key_str).and_then(::toml_edit::Item::as_table_mut) {
                            // An implicit table (only sub-tables) has no header to carry the comment.
                            table.set_implicit(false);
                            table.decor_mut().set_prefix(format!("\n{field_prefix}"));
                        } else if let Some(mut key) = doc.key_mut(key_str) {
                            key.leaf_decor_mut().set_prefix(field_prefix);
                        }
                    }
                )*
            }
        }
    };
}

pub(crate) use config_struct;
