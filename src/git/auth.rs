//! Git authentication
//!
//! Credentials come from git's own machinery, tried in this order for each
//! request libgit2 makes:
//! - ssh-agent, then the usual private keys in `~/.ssh/`
//! - git credential helpers for HTTPS
//! - anonymous access

use std::path::PathBuf;

use git2::{Cred, CredentialType, Error, ErrorClass, ErrorCode, RemoteCallbacks};
use tracing::debug;

const SSH_KEY_NAMES: &[&str] = &["id_ed25519", "id_ecdsa", "id_rsa"];

/// Build remote callbacks with credential lookup installed.
pub fn remote_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(|url, username_from_url, allowed| {
        debug!(url, ?allowed, "credentials requested");
        credentials_for(url, username_from_url, allowed)
    });
    callbacks
}

fn credentials_for(
    url: &str,
    username_from_url: Option<&str>,
    allowed: CredentialType,
) -> Result<Cred, Error> {
    if allowed.contains(CredentialType::DEFAULT) {
        return Cred::default();
    }

    if allowed.contains(CredentialType::SSH_KEY) {
        let username = username_from_url.unwrap_or("git");
        return Cred::ssh_key_from_agent(username).or_else(|_| ssh_key_file(username));
    }

    if allowed.contains(CredentialType::USER_PASS_PLAINTEXT) {
        return credential_helper(url, username_from_url);
    }

    if allowed.contains(CredentialType::USERNAME) {
        return Cred::username(username_from_url.unwrap_or("git"));
    }

    Err(auth_error("no supported authentication method"))
}

fn ssh_key_file(username: &str) -> Result<Cred, Error> {
    let ssh_dir = dirs::home_dir().unwrap_or_default().join(".ssh");

    SSH_KEY_NAMES
        .iter()
        .map(|name| ssh_dir.join(name))
        .filter(|private_key| private_key.exists())
        .find_map(|private_key| {
            let public_key = PathBuf::from(format!("{}.pub", private_key.display()));
            let public_key = public_key.exists().then_some(public_key);
            Cred::ssh_key(username, public_key.as_deref(), &private_key, None).ok()
        })
        .ok_or_else(|| auth_error("no usable SSH key found in ~/.ssh"))
}

fn credential_helper(url: &str, username_from_url: Option<&str>) -> Result<Cred, Error> {
    let config = git2::Config::open_default().or_else(|_| git2::Config::new())?;

    Cred::credential_helper(&config, url, username_from_url)
        .or_else(|_| Cred::userpass_plaintext(username_from_url.unwrap_or(""), ""))
}

fn auth_error(message: &str) -> Error {
    Error::new(ErrorCode::Auth, ErrorClass::Ssh, message)
}
