/// Ciphertexts that can be combined such that the result decrypts to the product of the
/// underlying plaintexts.
pub trait HomomorphicMultiplication: Sized {
    /// The type of the scalar that a ciphertext can be raised to.
    type Input;
    /// The error returned when two ciphertexts cannot be combined.
    type Error;

    /// Combines two ciphertexts into an encryption of the product of their plaintexts.
    fn mul(&self, rhs: &Self) -> Result<Self, Self::Error>;

    /// Computes the ciphertext corresponding to the plaintext raised to a scalar power.
    fn pow(&self, input: &Self::Input) -> Result<Self, Self::Error>;
}
