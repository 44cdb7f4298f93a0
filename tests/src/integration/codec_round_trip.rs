//! # Wire Format Round Trips
//!
//! Every payload decodes to what was encoded, in each format on its own.
//! The legacy format carries only the payloads it has a shape for.

#[cfg(test)]
mod tests {
    use signer_types::{SignPayload, SignRequestEnvelope};
    use vs_01_envelope_codec::{codec_for, fixtures, CodecError, WireFormat};

    fn envelopes(payloads: Vec<SignPayload>) -> Vec<SignRequestEnvelope> {
        payloads
            .into_iter()
            .enumerate()
            .map(|(i, payload)| {
                let envelope = fixtures::envelope(payload);
                if i % 2 == 0 {
                    envelope.with_signing_root(fixtures::root(i as u8))
                } else {
                    envelope
                }
            })
            .collect()
    }

    #[test]
    fn test_current_format_every_payload() -> anyhow::Result<()> {
        let codec = codec_for(WireFormat::Current);
        for envelope in envelopes(fixtures::all_payloads()) {
            let bytes = codec.encode(&envelope)?;
            assert_eq!(codec.decode(&bytes)?, envelope);
        }
        Ok(())
    }

    #[test]
    fn test_legacy_format_every_legacy_payload() -> anyhow::Result<()> {
        let codec = codec_for(WireFormat::Legacy);
        for envelope in envelopes(fixtures::legacy_payloads()) {
            let bytes = codec.encode(&envelope)?;
            assert_eq!(codec.decode(&bytes)?, envelope);
        }
        Ok(())
    }

    #[test]
    fn test_legacy_format_refuses_newer_payloads() {
        let codec = codec_for(WireFormat::Legacy);
        for envelope in envelopes(fixtures::current_only_payloads()) {
            assert!(matches!(
                codec.encode(&envelope),
                Err(CodecError::UnsupportedVariant { .. })
            ));
        }
    }

    #[test]
    fn test_reencoding_is_byte_identical() -> anyhow::Result<()> {
        for (format, payloads) in [
            (WireFormat::Current, fixtures::all_payloads()),
            (WireFormat::Legacy, fixtures::legacy_payloads()),
        ] {
            let codec = codec_for(format);
            for envelope in envelopes(payloads) {
                let bytes = codec.encode(&envelope)?;
                assert_eq!(codec.encode(&codec.decode(&bytes)?)?, bytes, "{}", format);
            }
        }
        Ok(())
    }

    #[test]
    fn test_formats_do_not_cross_decode() -> anyhow::Result<()> {
        let envelope = fixtures::envelope(fixtures::attestation_payload(284115, 77, 78));
        let legacy = codec_for(WireFormat::Legacy).encode(&envelope)?;
        assert!(codec_for(WireFormat::Current).decode(&legacy).is_err());
        Ok(())
    }
}
