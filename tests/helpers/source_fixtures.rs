//! A small but complete FHIR definitions set.
//!
//! Nine resources over a trimmed base schema, with the profile and
//! terminology bundles that bind their references and coded fields.
//! `AuditEvent.entity.what` is the only wildcard reference and
//! `DocumentReference` never references `Binary` directly.

pub const FHIR_ALL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns="http://hl7.org/fhir" targetNamespace="http://hl7.org/fhir" elementFormDefault="qualified">
  <xs:include schemaLocation="fhir-base.xsd"/>
  <xs:include schemaLocation="patient.xsd"/>
  <xs:include schemaLocation="practitioner.xsd"/>
  <xs:include schemaLocation="practitionerrole.xsd"/>
  <xs:include schemaLocation="organization.xsd"/>
  <xs:include schemaLocation="documentreference.xsd"/>
  <xs:include schemaLocation="binary.xsd"/>
  <xs:include schemaLocation="composition.xsd"/>
  <xs:include schemaLocation="auditevent.xsd"/>
</xs:schema>
"#;

pub const FHIR_SINGLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns="http://hl7.org/fhir" targetNamespace="http://hl7.org/fhir" elementFormDefault="qualified">
  <!-- primitive types -->
  <xs:simpleType name="string-primitive">
    <xs:restriction base="xs:string"><xs:minLength value="1"/></xs:restriction>
  </xs:simpleType>
  <xs:simpleType name="boolean-primitive">
    <xs:restriction base="xs:boolean"><xs:pattern value="true|false"/></xs:restriction>
  </xs:simpleType>
  <xs:simpleType name="code-primitive">
    <xs:restriction base="xs:token"><xs:pattern value="[^\s]+( [^\s]+)*"/></xs:restriction>
  </xs:simpleType>
  <xs:simpleType name="id-primitive">
    <xs:restriction base="xs:string"><xs:pattern value="[A-Za-z0-9\-\.]{1,64}"/></xs:restriction>
  </xs:simpleType>
  <xs:simpleType name="uri-primitive">
    <xs:restriction base="xs:anyURI"><xs:pattern value="\S*"/></xs:restriction>
  </xs:simpleType>
  <xs:simpleType name="decimal-primitive">
    <xs:restriction base="xs:decimal"><xs:pattern value="-?(0|[1-9][0-9]*)(\.[0-9]+)?"/></xs:restriction>
  </xs:simpleType>
  <xs:simpleType name="dateTime-primitive">
    <xs:restriction base="xs:string"><xs:pattern value="[0-9]{4}(-[0-9]{2})?"/></xs:restriction>
  </xs:simpleType>
  <xs:simpleType name="base64Binary-primitive">
    <xs:restriction base="xs:base64Binary"><xs:pattern value="(\s*([0-9a-zA-Z\+/=]){4}\s*)+"/></xs:restriction>
  </xs:simpleType>
  <!-- enumerations -->
  <xs:simpleType name="AdministrativeGender-list">
    <xs:restriction base="code-primitive">
      <xs:enumeration value="male"/>
      <xs:enumeration value="female"/>
      <xs:enumeration value="other"/>
      <xs:enumeration value="unknown"/>
    </xs:restriction>
  </xs:simpleType>
  <xs:simpleType name="LinkType-list">
    <xs:restriction base="code-primitive">
      <xs:enumeration value="replaced-by"/>
      <xs:enumeration value="refer"/>
    </xs:restriction>
  </xs:simpleType>
  <xs:simpleType name="DocumentReferenceStatus-list">
    <xs:restriction base="code-primitive">
      <xs:enumeration value="current"/>
      <xs:enumeration value="superseded"/>
    </xs:restriction>
  </xs:simpleType>
</xs:schema>
"#;

pub const FHIR_BASE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns:xhtml="http://www.w3.org/1999/xhtml" xmlns="http://hl7.org/fhir" targetNamespace="http://hl7.org/fhir" elementFormDefault="qualified">
  <xs:complexType name="Element">
    <xs:annotation>
      <xs:documentation xml:lang="en">Base definition for all elements in a resource.</xs:documentation>
    </xs:annotation>
    <xs:sequence>
      <xs:element name="extension" type="Extension" minOccurs="0" maxOccurs="unbounded"/>
    </xs:sequence>
    <xs:attribute name="id" type="string-primitive" use="optional"/>
  </xs:complexType>
  <xs:complexType name="BackboneElement">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:sequence>
          <xs:element name="modifierExtension" type="Extension" minOccurs="0" maxOccurs="unbounded"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Extension">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:attribute name="url" type="uri-primitive" use="required"/>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="string">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:attribute name="value" type="string-primitive" use="optional"/>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="boolean">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:attribute name="value" type="boolean-primitive" use="optional"/>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="code">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:attribute name="value" type="code-primitive" use="optional"/>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="AdministrativeGender">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:attribute name="value" type="AdministrativeGender-list" use="optional"/>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Identifier">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:sequence>
          <xs:element name="system" minOccurs="0" maxOccurs="1" type="uri"/>
          <xs:element name="value" minOccurs="0" maxOccurs="1" type="string"/>
          <xs:element name="assigner" minOccurs="0" maxOccurs="1" type="Reference"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Reference">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:sequence>
          <xs:element name="reference" minOccurs="0" maxOccurs="1" type="string"/>
          <xs:element name="display" minOccurs="0" maxOccurs="1" type="string"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Coding">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:sequence>
          <xs:element name="system" minOccurs="0" maxOccurs="1" type="uri"/>
          <xs:element name="code" minOccurs="0" maxOccurs="1" type="code"/>
          <xs:element name="display" minOccurs="0" maxOccurs="1" type="string"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="CodeableConcept">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:sequence>
          <xs:element name="coding" minOccurs="0" maxOccurs="unbounded" type="Coding"/>
          <xs:element name="text" minOccurs="0" maxOccurs="1" type="string"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Attachment">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:sequence>
          <xs:element name="contentType" minOccurs="0" maxOccurs="1" type="code"/>
          <xs:element name="url" minOccurs="0" maxOccurs="1" type="uri"/>
          <xs:element name="title" minOccurs="0" maxOccurs="1" type="string"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Narrative">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:sequence>
          <xs:element ref="xhtml:div" minOccurs="1" maxOccurs="1"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Resource">
    <xs:annotation>
      <xs:documentation xml:lang="en">This is the base resource type for everything.</xs:documentation>
    </xs:annotation>
    <xs:sequence>
      <xs:element name="id" minOccurs="0" maxOccurs="1" type="id"/>
    </xs:sequence>
  </xs:complexType>
  <xs:complexType name="DomainResource">
    <xs:complexContent>
      <xs:extension base="Resource">
        <xs:sequence>
          <xs:element name="text" minOccurs="0" maxOccurs="1" type="Narrative"/>
          <xs:element name="contained" minOccurs="0" maxOccurs="unbounded" type="ResourceContainer"/>
          <xs:element name="extension" minOccurs="0" maxOccurs="unbounded" type="Extension"/>
          <xs:element name="modifierExtension" minOccurs="0" maxOccurs="unbounded" type="Extension"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="ResourceContainer">
    <xs:choice>
      <xs:element ref="Patient"/>
      <xs:element ref="Practitioner"/>
      <xs:element ref="PractitionerRole"/>
      <xs:element ref="Organization"/>
      <xs:element ref="DocumentReference"/>
      <xs:element ref="Binary"/>
      <xs:element ref="Composition"/>
      <xs:element ref="AuditEvent"/>
    </xs:choice>
  </xs:complexType>
</xs:schema>
"#;

pub const PATIENT_XSD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns="http://hl7.org/fhir" targetNamespace="http://hl7.org/fhir" elementFormDefault="qualified">
  <xs:include schemaLocation="fhir-base.xsd"/>
  <xs:element name="Patient" type="Patient"/>
  <xs:complexType name="Patient">
    <xs:annotation>
      <xs:documentation xml:lang="en">Demographics and other administrative information about an individual receiving care.</xs:documentation>
      <xs:documentation xml:lang="en">If the element is present, it must have either a @value, an @id, or extensions</xs:documentation>
    </xs:annotation>
    <xs:complexContent>
      <xs:extension base="DomainResource">
        <xs:sequence>
          <xs:element name="identifier" minOccurs="0" maxOccurs="unbounded" type="Identifier"/>
          <xs:element name="active" minOccurs="0" maxOccurs="1" type="boolean"/>
          <xs:element name="name" minOccurs="0" maxOccurs="1" type="string"/>
          <xs:element name="gender" minOccurs="0" maxOccurs="1" type="AdministrativeGender"/>
          <xs:choice minOccurs="0" maxOccurs="1">
            <xs:element name="deceasedBoolean" type="boolean"/>
            <xs:element name="deceasedDateTime" type="dateTime"/>
          </xs:choice>
          <xs:element name="maritalStatus" minOccurs="0" maxOccurs="1" type="CodeableConcept"/>
          <xs:element name="contact" minOccurs="0" maxOccurs="unbounded" type="Patient.Contact"/>
          <xs:element name="generalPractitioner" minOccurs="0" maxOccurs="unbounded" type="Reference"/>
          <xs:element name="managingOrganization" minOccurs="0" maxOccurs="1" type="Reference"/>
          <xs:element name="link" minOccurs="0" maxOccurs="unbounded" type="Patient.Link"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Patient.Contact">
    <xs:complexContent>
      <xs:extension base="BackboneElement">
        <xs:sequence>
          <xs:element name="name" minOccurs="0" maxOccurs="1" type="string"/>
          <xs:element name="gender" minOccurs="0" maxOccurs="1" type="AdministrativeGender"/>
          <xs:element name="organization" minOccurs="0" maxOccurs="1" type="Reference"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Patient.Link">
    <xs:complexContent>
      <xs:extension base="BackboneElement">
        <xs:sequence>
          <xs:element name="other" minOccurs="1" maxOccurs="1" type="Reference"/>
          <xs:element name="type" minOccurs="1" maxOccurs="1" type="LinkType"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="LinkType">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:attribute name="value" type="LinkType-list" use="optional"/>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
</xs:schema>
"#;

pub const PRACTITIONER_XSD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns="http://hl7.org/fhir" targetNamespace="http://hl7.org/fhir" elementFormDefault="qualified">
  <xs:include schemaLocation="fhir-base.xsd"/>
  <xs:element name="Practitioner" type="Practitioner"/>
  <xs:complexType name="Practitioner">
    <xs:complexContent>
      <xs:extension base="DomainResource">
        <xs:sequence>
          <xs:element name="identifier" minOccurs="0" maxOccurs="unbounded" type="Identifier"/>
          <xs:element name="active" minOccurs="0" maxOccurs="1" type="boolean"/>
          <xs:element name="name" minOccurs="0" maxOccurs="1" type="string"/>
          <xs:element name="qualification" minOccurs="0" maxOccurs="unbounded" type="Practitioner.Qualification"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Practitioner.Qualification">
    <xs:complexContent>
      <xs:extension base="BackboneElement">
        <xs:sequence>
          <xs:element name="identifier" minOccurs="0" maxOccurs="unbounded" type="Identifier"/>
          <xs:element name="code" minOccurs="1" maxOccurs="1" type="CodeableConcept"/>
          <xs:element name="issuer" minOccurs="0" maxOccurs="1" type="Reference"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
</xs:schema>
"#;

pub const PRACTITIONER_ROLE_XSD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns="http://hl7.org/fhir" targetNamespace="http://hl7.org/fhir" elementFormDefault="qualified">
  <xs:include schemaLocation="fhir-base.xsd"/>
  <xs:element name="PractitionerRole" type="PractitionerRole"/>
  <xs:complexType name="PractitionerRole">
    <xs:complexContent>
      <xs:extension base="DomainResource">
        <xs:sequence>
          <xs:element name="active" minOccurs="0" maxOccurs="1" type="boolean"/>
          <xs:element name="practitioner" minOccurs="0" maxOccurs="1" type="Reference"/>
          <xs:element name="organization" minOccurs="0" maxOccurs="1" type="Reference"/>
          <xs:element name="code" minOccurs="0" maxOccurs="unbounded" type="CodeableConcept"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
</xs:schema>
"#;

pub const ORGANIZATION_XSD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns="http://hl7.org/fhir" targetNamespace="http://hl7.org/fhir" elementFormDefault="qualified">
  <xs:include schemaLocation="fhir-base.xsd"/>
  <xs:element name="Organization" type="Organization"/>
  <xs:complexType name="Organization">
    <xs:complexContent>
      <xs:extension base="DomainResource">
        <xs:sequence>
          <xs:element name="identifier" minOccurs="0" maxOccurs="unbounded" type="Identifier"/>
          <xs:element name="active" minOccurs="0" maxOccurs="1" type="boolean"/>
          <xs:element name="name" minOccurs="0" maxOccurs="1" type="string"/>
          <xs:element name="partOf" minOccurs="0" maxOccurs="1" type="Reference"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
</xs:schema>
"#;

pub const DOCUMENT_REFERENCE_XSD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns="http://hl7.org/fhir" targetNamespace="http://hl7.org/fhir" elementFormDefault="qualified">
  <xs:include schemaLocation="fhir-base.xsd"/>
  <xs:element name="DocumentReference" type="DocumentReference"/>
  <xs:complexType name="DocumentReference">
    <xs:complexContent>
      <xs:extension base="DomainResource">
        <xs:sequence>
          <xs:element name="status" minOccurs="1" maxOccurs="1" type="DocumentReferenceStatus"/>
          <xs:element name="docStatus" minOccurs="0" maxOccurs="1" type="code"/>
          <xs:element name="subject" minOccurs="0" maxOccurs="1" type="Reference"/>
          <xs:element name="author" minOccurs="0" maxOccurs="unbounded" type="Reference"/>
          <xs:element name="description" minOccurs="0" maxOccurs="1" type="string"/>
          <xs:element name="content" minOccurs="1" maxOccurs="unbounded" type="DocumentReference.Content"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="DocumentReference.Content">
    <xs:complexContent>
      <xs:extension base="BackboneElement">
        <xs:sequence>
          <xs:element name="attachment" minOccurs="1" maxOccurs="1" type="Attachment"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="DocumentReferenceStatus">
    <xs:complexContent>
      <xs:extension base="Element">
        <xs:attribute name="value" type="DocumentReferenceStatus-list" use="optional"/>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
</xs:schema>
"#;

pub const BINARY_XSD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns="http://hl7.org/fhir" targetNamespace="http://hl7.org/fhir" elementFormDefault="qualified">
  <xs:include schemaLocation="fhir-base.xsd"/>
  <xs:element name="Binary" type="Binary"/>
  <xs:complexType name="Binary">
    <xs:complexContent>
      <xs:extension base="Resource">
        <xs:sequence>
          <xs:element name="contentType" minOccurs="1" maxOccurs="1" type="code"/>
          <xs:element name="data" minOccurs="0" maxOccurs="1" type="base64Binary"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
</xs:schema>
"#;

pub const COMPOSITION_XSD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns="http://hl7.org/fhir" targetNamespace="http://hl7.org/fhir" elementFormDefault="qualified">
  <xs:include schemaLocation="fhir-base.xsd"/>
  <xs:element name="Composition" type="Composition"/>
  <xs:complexType name="Composition">
    <xs:complexContent>
      <xs:extension base="DomainResource">
        <xs:sequence>
          <xs:element name="status" minOccurs="1" maxOccurs="1" type="code"/>
          <xs:element name="subject" minOccurs="0" maxOccurs="1" type="Reference"/>
          <xs:element name="title" minOccurs="1" maxOccurs="1" type="string"/>
          <xs:element name="section" minOccurs="0" maxOccurs="unbounded" type="Composition.Section"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="Composition.Section">
    <xs:complexContent>
      <xs:extension base="BackboneElement">
        <xs:sequence>
          <xs:element name="title" minOccurs="0" maxOccurs="1" type="string"/>
          <xs:element name="entry" minOccurs="0" maxOccurs="unbounded" type="Reference"/>
          <xs:element name="section" minOccurs="0" maxOccurs="unbounded" type="Composition.Section"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
</xs:schema>
"#;

pub const AUDIT_EVENT_XSD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns="http://hl7.org/fhir" targetNamespace="http://hl7.org/fhir" elementFormDefault="qualified">
  <xs:include schemaLocation="fhir-base.xsd"/>
  <xs:element name="AuditEvent" type="AuditEvent"/>
  <xs:complexType name="AuditEvent">
    <xs:complexContent>
      <xs:extension base="DomainResource">
        <xs:sequence>
          <xs:element name="recorded" minOccurs="1" maxOccurs="1" type="dateTime"/>
          <xs:element name="entity" minOccurs="0" maxOccurs="unbounded" type="AuditEvent.Entity"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:complexType name="AuditEvent.Entity">
    <xs:complexContent>
      <xs:extension base="BackboneElement">
        <xs:sequence>
          <xs:element name="what" minOccurs="0" maxOccurs="1" type="Reference"/>
          <xs:element name="description" minOccurs="0" maxOccurs="1" type="string"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
</xs:schema>
"#;

pub const PROFILES_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Bundle xmlns="http://hl7.org/fhir">
  <id value="types"/>
  <type value="collection"/>
  <entry>
    <fullUrl value="http://hl7.org/fhir/StructureDefinition/Identifier"/>
    <resource>
      <StructureDefinition>
        <id value="Identifier"/>
        <url value="http://hl7.org/fhir/StructureDefinition/Identifier"/>
        <name value="Identifier"/>
        <snapshot>
          <element id="Identifier"><path value="Identifier"/></element>
          <element id="Identifier.system">
            <path value="Identifier.system"/>
            <type><code value="uri"/></type>
          </element>
          <element id="Identifier.assigner">
            <path value="Identifier.assigner"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Organization"/>
            </type>
          </element>
        </snapshot>
      </StructureDefinition>
    </resource>
  </entry>
  <entry>
    <fullUrl value="http://hl7.org/fhir/StructureDefinition/Extension"/>
    <resource>
      <StructureDefinition>
        <id value="Extension"/>
        <url value="http://hl7.org/fhir/StructureDefinition/Extension"/>
        <name value="Extension"/>
        <snapshot>
          <element id="Extension"><path value="Extension"/></element>
          <element id="Extension.url">
            <path value="Extension.url"/>
            <type><code value="uri"/></type>
          </element>
          <element id="Extension.value[x]">
            <path value="Extension.value[x]"/>
            <type><code value="base64Binary"/></type>
            <type><code value="Reference"/></type>
          </element>
        </snapshot>
      </StructureDefinition>
    </resource>
  </entry>
</Bundle>
"#;

pub const PROFILES_RESOURCES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Bundle xmlns="http://hl7.org/fhir">
  <id value="resources"/>
  <type value="collection"/>
  <entry>
    <resource>
      <CapabilityStatement><id value="base"/></CapabilityStatement>
    </resource>
  </entry>
  <entry>
    <resource>
      <StructureDefinition>
        <id value="Patient"/>
        <url value="http://hl7.org/fhir/StructureDefinition/Patient"/>
        <name value="Patient"/>
        <snapshot>
          <element id="Patient"><path value="Patient"/></element>
          <element id="Patient.identifier">
            <path value="Patient.identifier"/>
            <type><code value="Identifier"/></type>
          </element>
          <element id="Patient.gender">
            <path value="Patient.gender"/>
            <type><code value="code"/></type>
            <binding>
              <extension url="http://hl7.org/fhir/StructureDefinition/elementdefinition-bindingName">
                <valueString value="AdministrativeGender"/>
              </extension>
              <strength value="required"/>
              <valueSet value="http://hl7.org/fhir/ValueSet/administrative-gender|4.0.1"/>
            </binding>
          </element>
          <element id="Patient.maritalStatus">
            <path value="Patient.maritalStatus"/>
            <type><code value="CodeableConcept"/></type>
            <binding>
              <extension url="http://hl7.org/fhir/StructureDefinition/elementdefinition-bindingName">
                <valueString value="MaritalStatus"/>
              </extension>
              <strength value="extensible"/>
              <valueSet value="http://hl7.org/fhir/ValueSet/marital-status"/>
            </binding>
          </element>
          <element id="Patient.contact.organization">
            <path value="Patient.contact.organization"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Organization"/>
            </type>
          </element>
          <element id="Patient.generalPractitioner">
            <path value="Patient.generalPractitioner"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Organization"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Practitioner"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/PractitionerRole"/>
            </type>
          </element>
          <element id="Patient.managingOrganization">
            <path value="Patient.managingOrganization"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Organization"/>
            </type>
          </element>
          <element id="Patient.link.other">
            <path value="Patient.link.other"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Patient"/>
            </type>
          </element>
          <element id="Patient.link.type">
            <path value="Patient.link.type"/>
            <type><code value="code"/></type>
            <binding>
              <extension url="http://hl7.org/fhir/StructureDefinition/elementdefinition-bindingName">
                <valueString value="LinkType"/>
              </extension>
              <strength value="required"/>
              <valueSet value="http://hl7.org/fhir/ValueSet/link-type|4.0.1"/>
            </binding>
          </element>
        </snapshot>
      </StructureDefinition>
    </resource>
  </entry>
  <entry>
    <resource>
      <StructureDefinition>
        <id value="Practitioner"/>
        <name value="Practitioner"/>
        <snapshot>
          <element id="Practitioner"><path value="Practitioner"/></element>
          <element id="Practitioner.qualification.code">
            <path value="Practitioner.qualification.code"/>
            <type><code value="CodeableConcept"/></type>
            <binding>
              <strength value="example"/>
              <valueSet value="http://terminology.hl7.org/ValueSet/v2-0360"/>
            </binding>
          </element>
          <element id="Practitioner.qualification.issuer">
            <path value="Practitioner.qualification.issuer"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Organization"/>
            </type>
          </element>
        </snapshot>
      </StructureDefinition>
    </resource>
  </entry>
  <entry>
    <resource>
      <StructureDefinition>
        <id value="PractitionerRole"/>
        <name value="PractitionerRole"/>
        <snapshot>
          <element id="PractitionerRole"><path value="PractitionerRole"/></element>
          <element id="PractitionerRole.practitioner">
            <path value="PractitionerRole.practitioner"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Practitioner"/>
            </type>
          </element>
          <element id="PractitionerRole.organization">
            <path value="PractitionerRole.organization"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Organization"/>
            </type>
          </element>
          <element id="PractitionerRole.code">
            <path value="PractitionerRole.code"/>
            <type><code value="CodeableConcept"/></type>
            <binding>
              <extension url="http://hl7.org/fhir/StructureDefinition/elementdefinition-bindingName">
                <valueString value="PractitionerRole"/>
              </extension>
              <strength value="example"/>
              <valueSet value="http://hl7.org/fhir/ValueSet/practitioner-role"/>
            </binding>
          </element>
        </snapshot>
      </StructureDefinition>
    </resource>
  </entry>
  <entry>
    <resource>
      <StructureDefinition>
        <id value="Organization"/>
        <name value="Organization"/>
        <snapshot>
          <element id="Organization"><path value="Organization"/></element>
          <element id="Organization.partOf">
            <path value="Organization.partOf"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Organization"/>
            </type>
          </element>
          <element id="Organization.endpoint">
            <path value="Organization.endpoint"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Endpoint"/>
            </type>
          </element>
        </snapshot>
      </StructureDefinition>
    </resource>
  </entry>
  <entry>
    <resource>
      <StructureDefinition>
        <id value="DocumentReference"/>
        <name value="DocumentReference"/>
        <snapshot>
          <element id="DocumentReference"><path value="DocumentReference"/></element>
          <element id="DocumentReference.status">
            <path value="DocumentReference.status"/>
            <type><code value="code"/></type>
            <binding>
              <extension url="http://hl7.org/fhir/StructureDefinition/elementdefinition-bindingName">
                <valueString value="DocumentReferenceStatus"/>
              </extension>
              <strength value="required"/>
              <valueSet value="http://hl7.org/fhir/ValueSet/document-reference-status|4.0.1"/>
            </binding>
          </element>
          <element id="DocumentReference.docStatus">
            <path value="DocumentReference.docStatus"/>
            <type><code value="code"/></type>
            <binding>
              <extension url="http://hl7.org/fhir/StructureDefinition/elementdefinition-bindingName">
                <valueString value="ReferredDocumentStatus"/>
              </extension>
              <strength value="required"/>
              <valueSet value="http://hl7.org/fhir/ValueSet/composition-status|4.0.1"/>
            </binding>
          </element>
          <element id="DocumentReference.subject">
            <path value="DocumentReference.subject"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Patient"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Practitioner"/>
            </type>
          </element>
          <element id="DocumentReference.author">
            <path value="DocumentReference.author"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Practitioner"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/PractitionerRole"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Organization"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Patient"/>
            </type>
          </element>
        </snapshot>
      </StructureDefinition>
    </resource>
  </entry>
  <entry>
    <resource>
      <StructureDefinition>
        <id value="Composition"/>
        <name value="Composition"/>
        <snapshot>
          <element id="Composition"><path value="Composition"/></element>
          <element id="Composition.subject">
            <path value="Composition.subject"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Patient"/>
            </type>
          </element>
          <element id="Composition.section.entry">
            <path value="Composition.section.entry"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/DocumentReference"/>
            </type>
          </element>
        </snapshot>
      </StructureDefinition>
    </resource>
  </entry>
  <entry>
    <resource>
      <StructureDefinition>
        <id value="AuditEvent"/>
        <name value="AuditEvent"/>
        <snapshot>
          <element id="AuditEvent"><path value="AuditEvent"/></element>
          <element id="AuditEvent.entity.what">
            <path value="AuditEvent.entity.what"/>
            <type>
              <code value="Reference"/>
              <targetProfile value="http://hl7.org/fhir/StructureDefinition/Resource"/>
            </type>
          </element>
        </snapshot>
      </StructureDefinition>
    </resource>
  </entry>
</Bundle>
"#;

pub const VALUESETS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Bundle xmlns="http://hl7.org/fhir">
  <id value="valuesets"/>
  <type value="collection"/>
  <entry>
    <resource>
      <CodeSystem>
        <id value="administrative-gender"/>
        <url value="http://hl7.org/fhir/administrative-gender"/>
        <name value="AdministrativeGender"/>
        <description value="The gender of a person used for administrative purposes."/>
        <valueSet value="http://hl7.org/fhir/ValueSet/administrative-gender"/>
        <concept><code value="male"/><display value="Male"/></concept>
        <concept><code value="female"/><display value="Female"/></concept>
        <concept><code value="other"/><display value="Other"/></concept>
        <concept><code value="unknown"/><display value="Unknown"/></concept>
      </CodeSystem>
    </resource>
  </entry>
  <entry>
    <resource>
      <ValueSet>
        <id value="administrative-gender"/>
        <url value="http://hl7.org/fhir/ValueSet/administrative-gender"/>
        <name value="AdministrativeGender"/>
        <compose>
          <include><system value="http://hl7.org/fhir/administrative-gender"/></include>
        </compose>
      </ValueSet>
    </resource>
  </entry>
  <entry>
    <resource>
      <ValueSet>
        <id value="marital-status"/>
        <url value="http://hl7.org/fhir/ValueSet/marital-status"/>
        <name value="Marital Status"/>
        <description value="This value set defines the set of codes that can be used to indicate the marital status of a person."/>
        <compose>
          <include>
            <system value="http://terminology.hl7.org/CodeSystem/v3-MaritalStatus"/>
            <concept><code value="M"/><display value="Married"/></concept>
            <concept><code value="S"/><display value="Never Married"/></concept>
          </include>
        </compose>
      </ValueSet>
    </resource>
  </entry>
  <entry>
    <resource>
      <CodeSystem>
        <id value="link-type"/>
        <url value="http://hl7.org/fhir/link-type"/>
        <name value="LinkType"/>
        <valueSet value="http://hl7.org/fhir/ValueSet/link-type"/>
        <concept><code value="replaced-by"/><display value="Replaced-by"/></concept>
        <concept><code value="refer"/><display value="Refer"/></concept>
      </CodeSystem>
    </resource>
  </entry>
  <entry>
    <resource>
      <ValueSet>
        <id value="document-reference-status"/>
        <url value="http://hl7.org/fhir/ValueSet/document-reference-status"/>
        <name value="DocumentReferenceStatus"/>
        <compose>
          <include>
            <system value="http://hl7.org/fhir/document-reference-status"/>
            <concept><code value="current"/><display value="Current"/></concept>
            <concept><code value="superseded"/></concept>
            <concept><code value="entered-in-error"/></concept>
          </include>
        </compose>
      </ValueSet>
    </resource>
  </entry>
  <entry>
    <resource>
      <ValueSet>
        <id value="practitioner-role"/>
        <url value="http://hl7.org/fhir/ValueSet/practitioner-role"/>
        <name value="PractitionerRole"/>
        <compose>
          <include>
            <system value="http://terminology.hl7.org/CodeSystem/practitioner-role"/>
            <concept><code value="doctor"/><display value="Doctor"/></concept>
            <concept><code value="nurse"/><display value="Nurse"/></concept>
          </include>
        </compose>
      </ValueSet>
    </resource>
  </entry>
</Bundle>
"#;

/// Every document of the set with its path relative to the definitions root.
pub const DEFINITION_FILES: &[(&str, &str)] = &[
    ("fhir-all-xsd/fhir-all.xsd", FHIR_ALL),
    ("fhir-all-xsd/fhir-single.xsd", FHIR_SINGLE),
    ("fhir-all-xsd/fhir-base.xsd", FHIR_BASE),
    ("fhir-all-xsd/patient.xsd", PATIENT_XSD),
    ("fhir-all-xsd/practitioner.xsd", PRACTITIONER_XSD),
    ("fhir-all-xsd/practitionerrole.xsd", PRACTITIONER_ROLE_XSD),
    ("fhir-all-xsd/organization.xsd", ORGANIZATION_XSD),
    ("fhir-all-xsd/documentreference.xsd", DOCUMENT_REFERENCE_XSD),
    ("fhir-all-xsd/binary.xsd", BINARY_XSD),
    ("fhir-all-xsd/composition.xsd", COMPOSITION_XSD),
    ("fhir-all-xsd/auditevent.xsd", AUDIT_EVENT_XSD),
    ("profiles-types.xml", PROFILES_TYPES),
    ("profiles-resources.xml", PROFILES_RESOURCES),
    ("valuesets.xml", VALUESETS),
];

/// Reachability options for the set: four primary resources and the
/// attachment edge the profiles do not declare.
pub const REACH_OPTIONS_YAML: &str = r#"
level: 2
primary: [Patient, Practitioner, PractitionerRole, Organization]
graph:
  extra_edges:
    - target: Binary
      referrer: DocumentReference
      path: content.attachment.url
"#;
