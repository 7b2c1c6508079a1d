//! Response parsing for the AXL operations
//!
//! Parsers take the raw response document, route SOAP faults into
//! [`AxlError::Fault`], and lift the `<return>` payload into model types.

use crate::error::{AxlError, AxlFault, Result};
use crate::model::{
    DeviceProfile, DevicePool, EndUser, LineEntry, LineSummary, NameRef, Phone,
};
use crate::xml::XmlNode;

/// Extract the fault from a response document, when it carries one.
pub fn fault(xml: &str) -> Option<AxlFault> {
    let root = XmlNode::parse(xml).ok()?;
    let body = root.child("Body")?;
    body.child("Fault").map(parse_fault)
}

/// Parse a response document down to the operation's `<return>` element.
pub fn return_node(xml: &str, operation: &str) -> Result<XmlNode> {
    let root = XmlNode::parse(xml)?;
    let body = root
        .child("Body")
        .ok_or_else(|| AxlError::missing(operation, "Body"))?;

    if let Some(fault) = body.child("Fault") {
        return Err(AxlError::Fault(parse_fault(fault)));
    }

    body.descendant("return")
        .cloned()
        .ok_or_else(|| AxlError::missing(operation, "return"))
}

fn parse_fault(fault: &XmlNode) -> AxlFault {
    let axl_error = fault.child("detail").and_then(|d| d.descendant("axlError"));
    AxlFault {
        fault_code: fault.child_text("faultcode").unwrap_or("").to_string(),
        fault_string: fault.child_text("faultstring").unwrap_or("").to_string(),
        axl_code: axl_error
            .and_then(|e| e.child_text("axlcode"))
            .and_then(|code| code.parse().ok()),
        axl_message: axl_error
            .and_then(|e| e.child_text("axlmessage"))
            .map(str::to_string),
    }
}

/// `getUser` response.
pub fn get_user(xml: &str) -> Result<EndUser> {
    let ret = return_node(xml, "getUser")?;
    let user = ret
        .child("user")
        .ok_or_else(|| AxlError::missing("getUser", "user"))?;
    Ok(parse_end_user(user))
}

/// `getPhone` response.
pub fn get_phone(xml: &str) -> Result<Phone> {
    let ret = return_node(xml, "getPhone")?;
    let phone = ret
        .child("phone")
        .ok_or_else(|| AxlError::missing("getPhone", "phone"))?;
    Ok(parse_phone(phone))
}

/// `getDeviceProfile` response.
pub fn get_device_profile(xml: &str) -> Result<DeviceProfile> {
    let ret = return_node(xml, "getDeviceProfile")?;
    let profile = ret
        .child("deviceProfile")
        .ok_or_else(|| AxlError::missing("getDeviceProfile", "deviceProfile"))?;
    Ok(DeviceProfile {
        name: profile.child_text("name").unwrap_or("").to_string(),
        description: profile.child_text("description").map(str::to_string),
        lines: parse_lines(profile),
        uuid: profile.attribute("uuid").map(str::to_string),
    })
}

/// `listDevicePool` response rows.
pub fn list_device_pool(xml: &str) -> Result<Vec<DevicePool>> {
    let ret = return_node(xml, "listDevicePool")?;
    Ok(ret
        .children_named("devicePool")
        .map(|node| DevicePool {
            name: node.child_text("name").unwrap_or("").to_string(),
            uuid: node.attribute("uuid").map(str::to_string),
        })
        .collect())
}

/// `listLine` response rows.
pub fn list_line(xml: &str) -> Result<Vec<LineEntry>> {
    let ret = return_node(xml, "listLine")?;
    Ok(ret
        .children_named("line")
        .map(|node| LineEntry {
            pattern: node.child_text("pattern").unwrap_or("").to_string(),
            uuid: node.attribute("uuid").map(str::to_string),
        })
        .collect())
}

/// `listPhone` response rows.
pub fn list_phone(xml: &str) -> Result<Vec<Phone>> {
    let ret = return_node(xml, "listPhone")?;
    Ok(ret.children_named("phone").map(parse_phone).collect())
}

/// Uuid text returned by add, update and remove operations.
pub fn returned_uuid(xml: &str, operation: &str) -> Result<String> {
    let ret = return_node(xml, operation)?;
    ret.non_empty_text()
        .map(str::to_string)
        .ok_or_else(|| AxlError::missing(operation, "return"))
}

/// `executeSQLUpdate` row count.
pub fn rows_updated(xml: &str) -> Result<u32> {
    let ret = return_node(xml, "executeSQLUpdate")?;
    let text = ret
        .child_text("rowsUpdated")
        .ok_or_else(|| AxlError::missing("executeSQLUpdate", "rowsUpdated"))?;
    text.parse()
        .map_err(|_| AxlError::invalid("rowsUpdated", text))
}

fn parse_end_user(node: &XmlNode) -> EndUser {
    EndUser {
        user_id: node.child_text("userid").unwrap_or("").to_string(),
        first_name: node.child_text("firstName").map(str::to_string),
        last_name: node.child_text("lastName").map(str::to_string),
        telephone_number: node.child_text("telephoneNumber").map(str::to_string),
        ldap_directory: name_ref(node, "ldapDirectoryName"),
        uuid: node.attribute("uuid").map(str::to_string),
    }
}

fn parse_phone(node: &XmlNode) -> Phone {
    Phone {
        name: node.child_text("name").unwrap_or("").to_string(),
        description: node.child_text("description").map(str::to_string),
        device_pool: name_ref(node, "devicePoolName"),
        location: name_ref(node, "locationName"),
        media_resource_list: name_ref(node, "mediaResourceListName"),
        calling_search_space: name_ref(node, "callingSearchSpaceName"),
        lines: parse_lines(node),
        uuid: node.attribute("uuid").map(str::to_string),
    }
}

fn parse_lines(node: &XmlNode) -> Vec<LineSummary> {
    node.child("lines")
        .map(|lines| lines.children_named("line").map(parse_line_summary).collect())
        .unwrap_or_default()
}

fn parse_line_summary(node: &XmlNode) -> LineSummary {
    let dirn = node.child("dirn");
    LineSummary {
        index: node
            .child_text("index")
            .and_then(|index| index.parse().ok())
            .unwrap_or(0),
        pattern: dirn
            .and_then(|d| d.child_text("pattern"))
            .unwrap_or("")
            .to_string(),
        route_partition: dirn
            .map(|d| name_ref(d, "routePartitionName"))
            .unwrap_or_default(),
        e164_mask: node.child_text("e164Mask").map(str::to_string),
        busy_trigger: node
            .child_text("busyTrigger")
            .and_then(|trigger| trigger.parse().ok()),
        uuid: node.attribute("uuid").map(str::to_string),
    }
}

fn name_ref(parent: &XmlNode, name: &str) -> NameRef {
    match parent.child(name) {
        Some(node) => NameRef {
            name: node.non_empty_text().map(str::to_string),
            uuid: node.attribute("uuid").map(str::to_string),
        },
        None => NameRef::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn wrap(inner: &str) -> String {
        format!(
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
                <soapenv:Body>{inner}</soapenv:Body>
            </soapenv:Envelope>"#
        )
    }

    #[test]
    fn parses_end_user_with_directory_reference() {
        let xml = wrap(
            r#"<ns:getUserResponse xmlns:ns="http://www.cisco.com/AXL/API/14.0">
                <return>
                    <user uuid="{FE12}">
                        <userid>E000123</userid>
                        <firstName>Jane</firstName>
                        <lastName>Doe</lastName>
                        <telephoneNumber>7135551234</telephoneNumber>
                        <ldapDirectoryName uuid="{AB34}">Corp Directory Sync</ldapDirectoryName>
                    </user>
                </return>
            </ns:getUserResponse>"#,
        );
        let user = get_user(&xml).unwrap();
        assert_eq!(user.user_id, "E000123");
        assert_eq!(user.telephone_number.as_deref(), Some("7135551234"));
        assert_eq!(user.ldap_directory.as_name(), Some("Corp Directory Sync"));
        assert_eq!(user.ldap_directory.uuid.as_deref(), Some("{AB34}"));
        assert_eq!(user.uuid.as_deref(), Some("{FE12}"));
    }

    #[test]
    fn empty_directory_element_reads_as_unset() {
        let xml = wrap(
            r#"<ns:getUserResponse xmlns:ns="http://www.cisco.com/AXL/API/14.0">
                <return>
                    <user>
                        <userid>E000124</userid>
                        <ldapDirectoryName/>
                    </user>
                </return>
            </ns:getUserResponse>"#,
        );
        let user = get_user(&xml).unwrap();
        assert!(!user.ldap_directory.is_set());
    }

    #[test]
    fn parses_phone_template_with_two_lines() {
        let xml = wrap(
            r#"<ns:getPhoneResponse xmlns:ns="http://www.cisco.com/AXL/API/14.0">
                <return>
                    <phone uuid="{P1}">
                        <name>CSFE000100</name>
                        <devicePoolName uuid="{DP}">ICU_DP</devicePoolName>
                        <locationName uuid="{LO}">ICU_Loc</locationName>
                        <mediaResourceListName uuid="{MR}">ICU_MRGL</mediaResourceListName>
                        <callingSearchSpaceName uuid="{CS}">06_Device</callingSearchSpaceName>
                        <lines>
                            <line uuid="{L1}">
                                <index>1</index>
                                <dirn uuid="{D1}">
                                    <pattern>1216053001</pattern>
                                    <routePartitionName uuid="{RP}">PCCE_DN_PT</routePartitionName>
                                </dirn>
                                <e164Mask>7135551234</e164Mask>
                                <busyTrigger>1</busyTrigger>
                            </line>
                            <line uuid="{L2}">
                                <index>2</index>
                                <dirn><pattern>1216054001</pattern></dirn>
                            </line>
                        </lines>
                    </phone>
                </return>
            </ns:getPhoneResponse>"#,
        );
        let phone = get_phone(&xml).unwrap();
        assert_eq!(phone.device_pool.as_name(), Some("ICU_DP"));
        assert_eq!(phone.lines.len(), 2);
        assert_eq!(phone.lines[0].pattern, "1216053001");
        assert_eq!(phone.lines[0].busy_trigger, Some(1));
        assert_eq!(phone.lines[1].index, 2);
        assert_eq!(phone.lines[1].pattern, "1216054001");
    }

    #[test]
    fn list_line_collects_patterns() {
        let xml = wrap(
            r#"<ns:listLineResponse xmlns:ns="http://www.cisco.com/AXL/API/14.0">
                <return>
                    <line uuid="{1}"><pattern>1216053002</pattern></line>
                    <line uuid="{2}"><pattern>1216053005</pattern></line>
                    <line uuid="{3}"><pattern>1216053001</pattern></line>
                </return>
            </ns:listLineResponse>"#,
        );
        let lines = list_line(&xml).unwrap();
        let patterns: Vec<_> = lines.iter().map(|l| l.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["1216053002", "1216053005", "1216053001"]);
    }

    #[test]
    fn empty_list_returns_no_rows() {
        let xml = wrap(
            r#"<ns:listDevicePoolResponse xmlns:ns="http://www.cisco.com/AXL/API/14.0">
                <return/>
            </ns:listDevicePoolResponse>"#,
        );
        assert!(list_device_pool(&xml).unwrap().is_empty());
    }

    #[test]
    fn fault_maps_to_error_with_axl_detail() {
        let xml = wrap(
            r#"<soapenv:Fault>
                <faultcode>soapenv:Client</faultcode>
                <faultstring>Item not valid: The specified CSFE000001 was not found</faultstring>
                <detail>
                    <axlError>
                        <axlcode>5007</axlcode>
                        <axlmessage>Item not valid: The specified CSFE000001 was not found</axlmessage>
                        <request>getPhone</request>
                    </axlError>
                </detail>
            </soapenv:Fault>"#,
        );
        let err = get_phone(&xml).unwrap_err();
        let fault = err.fault().expect("fault variant");
        assert_eq!(fault.axl_code, Some(5007));
        assert!(fault.fault_string.contains("CSFE000001"));

        assert_eq!(super::fault(&xml).unwrap().axl_code, Some(5007));
    }

    #[test]
    fn add_response_yields_uuid_text() {
        let xml = wrap(
            r#"<ns:addLineResponse xmlns:ns="http://www.cisco.com/AXL/API/14.0">
                <return>{0B0D6A3B-1234-5678-9ABC-DEF012345678}</return>
            </ns:addLineResponse>"#,
        );
        assert_eq!(
            returned_uuid(&xml, "addLine").unwrap(),
            "{0B0D6A3B-1234-5678-9ABC-DEF012345678}"
        );
    }

    #[test]
    fn rows_updated_parses_count() {
        let xml = wrap(
            r#"<ns:executeSQLUpdateResponse xmlns:ns="http://www.cisco.com/AXL/API/14.0">
                <return><rowsUpdated>1</rowsUpdated></return>
            </ns:executeSQLUpdateResponse>"#,
        );
        assert_eq!(rows_updated(&xml).unwrap(), 1);
    }
}
