use crate::{driver::Driver, Error, Result};

use url::Url;

/// Returns the built-in driver for the URL's scheme.
pub fn driver_for_url(url: &str) -> Result<Box<dyn Driver>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    match parsed.scheme() {
        "mysql" => mysql(url),
        "sqlite" => sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

/// Builds a `mysql://` URL from its parts.
pub(crate) fn mysql_url(host: &str, user: &str, password: &str, database: &str) -> Result<Url> {
    let invalid = || Error::invalid_connection_url(format!("invalid MySQL host `{host}`"));

    let mut url = Url::parse(&format!("mysql://{host}")).map_err(|_| invalid())?;
    url.set_username(user).map_err(|_| invalid())?;
    url.set_password(Some(password).filter(|password| !password.is_empty()))
        .map_err(|_| invalid())?;
    url.set_path(&format!("/{database}"));

    Ok(url)
}

#[cfg(feature = "mysql")]
fn mysql(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(simpleorm_driver_mysql::MySQL::new(url)?))
}

#[cfg(not(feature = "mysql"))]
fn mysql(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`mysql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
fn sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(simpleorm_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn sqlite(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
