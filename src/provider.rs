use crate::config::AuthCredentials;

/// Builds an authentication provider from client credentials, a callback URL,
/// and any additional scopes.
///
/// Concrete provider types come from whichever OAuth library the server wires
/// in; this crate only carries the construction contract. Any
/// `Fn(&str, &str, &str, &[&str]) -> P` satisfies it, so a provider library's
/// constructor function can be passed directly.
pub trait ProviderProducer {
    type Provider;

    fn produce(
        &self,
        key: &str,
        secret: &str,
        callback_url: &str,
        scopes: &[&str],
    ) -> Self::Provider;
}

impl<F, P> ProviderProducer for F
where
    F: Fn(&str, &str, &str, &[&str]) -> P,
{
    type Provider = P;

    fn produce(&self, key: &str, secret: &str, callback_url: &str, scopes: &[&str]) -> P {
        self(key, secret, callback_url, scopes)
    }
}

impl AuthCredentials {
    /// Feeds this credential pair into a producer.
    pub fn build_provider<T: ProviderProducer>(
        &self,
        producer: &T,
        callback_url: &str,
        scopes: &[&str],
    ) -> T::Provider {
        producer.produce(&self.key, &self.secret, callback_url, scopes)
    }
}
