//! SOAP 1.1 envelope construction for AXL requests

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};

use crate::error::{AxlError, Result};

const SOAP_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// AXL namespace for a schema version, e.g. `14.0`.
pub fn axl_namespace(version: &str) -> String {
    format!("http://www.cisco.com/AXL/API/{version}")
}

/// `SOAPAction` header value CUCM expects for an operation. The quotes are
/// part of the value.
pub fn soap_action(version: &str, operation: &str) -> String {
    format!("\"CUCM:DB ver={version} {operation}\"")
}

/// A ready-to-send AXL request: the operation name plus the SOAP document.
#[derive(Debug, Clone)]
pub struct AxlRequest {
    /// AXL operation, e.g. `getUser`
    pub operation: &'static str,
    /// Complete SOAP envelope
    pub body: String,
}

/// Event-based writer for one AXL request.
///
/// Opens the envelope and the operation element up front; the request
/// builders fill in body elements and call [`EnvelopeWriter::finish`].
pub struct EnvelopeWriter {
    writer: Writer<Cursor<Vec<u8>>>,
    operation: &'static str,
}

impl EnvelopeWriter {
    /// Start an envelope for `operation` against the given schema version.
    pub fn new(operation: &'static str, version: &str) -> Result<Self> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(AxlError::xml)?;

        let mut envelope = BytesStart::new("soapenv:Envelope");
        envelope.push_attribute(("xmlns:soapenv", SOAP_NS));
        envelope.push_attribute(("xmlns:ns", axl_namespace(version).as_str()));
        writer
            .write_event(Event::Start(envelope))
            .map_err(AxlError::xml)?;
        writer
            .write_event(Event::Empty(BytesStart::new("soapenv:Header")))
            .map_err(AxlError::xml)?;
        writer
            .write_event(Event::Start(BytesStart::new("soapenv:Body")))
            .map_err(AxlError::xml)?;

        let mut this = Self { writer, operation };
        this.open(&format!("ns:{operation}"))?;
        Ok(this)
    }

    /// Open a container element.
    pub fn open(&mut self, name: &str) -> Result<&mut Self> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(AxlError::xml)?;
        Ok(self)
    }

    /// Open a container element carrying attributes.
    pub fn open_with(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<&mut Self> {
        let mut elem = BytesStart::new(name);
        for (key, value) in attrs {
            elem.push_attribute((*key, *value));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(AxlError::xml)?;
        Ok(self)
    }

    /// Close a container element.
    pub fn close(&mut self, name: &str) -> Result<&mut Self> {
        self.writer
            .write_event(Event::End(BytesStart::new(name).to_end()))
            .map_err(AxlError::xml)?;
        Ok(self)
    }

    /// Write `<name>value</name>` with the value escaped.
    pub fn field(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        self.open(name)?;
        self.writer
            .write_event(Event::Text(BytesText::new(value)))
            .map_err(AxlError::xml)?;
        self.close(name)
    }

    /// Write the field only when a value is present.
    pub fn field_opt(&mut self, name: &str, value: Option<&str>) -> Result<&mut Self> {
        if let Some(value) = value {
            self.field(name, value)?;
        }
        Ok(self)
    }

    /// Write `<name/>`, the form returnedTags entries take.
    pub fn empty(&mut self, name: &str) -> Result<&mut Self> {
        self.writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(AxlError::xml)?;
        Ok(self)
    }

    /// Close the operation element and the envelope, yielding the request.
    pub fn finish(mut self) -> Result<AxlRequest> {
        let operation = self.operation;
        self.close(&format!("ns:{operation}"))?;
        self.close("soapenv:Body")?;
        self.close("soapenv:Envelope")?;
        let bytes = self.writer.into_inner().into_inner();
        let body = String::from_utf8(bytes).map_err(AxlError::xml)?;
        Ok(AxlRequest { operation, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_carries_namespace_and_operation() {
        let mut w = EnvelopeWriter::new("getUser", "14.0").unwrap();
        w.field("userid", "E000123").unwrap();
        let request = w.finish().unwrap();

        assert_eq!(request.operation, "getUser");
        assert!(request.body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(request.body.contains("xmlns:ns=\"http://www.cisco.com/AXL/API/14.0\""));
        assert!(request.body.contains("<ns:getUser><userid>E000123</userid></ns:getUser>"));
        assert!(request.body.ends_with("</soapenv:Envelope>"));
    }

    #[test]
    fn soap_action_is_quoted() {
        assert_eq!(soap_action("14.0", "addLine"), "\"CUCM:DB ver=14.0 addLine\"");
    }

    #[test]
    fn field_text_is_escaped() {
        let mut w = EnvelopeWriter::new("executeSQLUpdate", "14.0").unwrap();
        w.field("sql", "select 1 where a < b & c = 'x'").unwrap();
        let request = w.finish().unwrap();
        assert!(request.body.contains("a &lt; b &amp; c"));
        assert!(!request.body.contains("a < b"));
    }
}
